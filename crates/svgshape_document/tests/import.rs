use pretty_assertions::assert_eq;
use svgshape_document::{
    color::Color, export, import, import_with_options, ImportOptions, Shape, Value, WarningKind,
};
use svgshape_path::{command::Command, geometry::Point};

fn fill(shape: &Shape) -> Option<[u8; 4]> {
    shape
        .attributes
        .get("fill")
        .and_then(Value::as_color)
        .map(Color::to_rgba8)
}

#[test]
fn rect_bounds() -> anyhow::Result<()> {
    let imported = import(r#"<svg><rect x="0" y="0" width="10" height="5"/></svg>"#)?;
    let path = &imported.shapes[0].path;

    let segments = path
        .0
        .iter()
        .filter(|command| matches!(command, Command::LineTo(_)))
        .count();
    assert_eq!(segments, 4);
    assert_eq!(path.0.last(), Some(&Command::ClosePath));

    let bounds = path.bounding_box().expect("rect has bounds");
    assert_eq!(bounds.min, Point::new(0.0, 0.0));
    assert_eq!(bounds.max, Point::new(10.0, 5.0));
    Ok(())
}

#[test]
fn polygon_closes() -> anyhow::Result<()> {
    let imported = import(
        r#"<svg>
            <polygon points="0,0 10,0 10,10"/>
            <polyline points="0,0 10,0 10,10"/>
        </svg>"#,
    )?;
    let [polygon, polyline] = &imported.shapes[..] else {
        panic!("expected two shapes, found {:?}", imported.shapes);
    };
    let vertices = |shape: &Shape| {
        shape
            .path
            .0
            .iter()
            .filter_map(Command::end_point)
            .collect::<Vec<_>>()
    };
    assert_eq!(vertices(polygon), vertices(polyline));
    assert_eq!(vertices(polygon).len(), 3);
    assert_eq!(polygon.path.0.last(), Some(&Command::ClosePath));
    assert!(!polyline.path.0.contains(&Command::ClosePath));
    Ok(())
}

#[test]
fn group_fill() -> anyhow::Result<()> {
    let imported = import(
        r##"<svg>
            <g fill="#ff0000">
                <path d="M0,0 L10,10"/>
                <path d="M0,0 L10,10" fill="#00f"/>
            </g>
        </svg>"##,
    )?;
    assert_eq!(fill(&imported.shapes[0]), Some([255, 0, 0, 255]));
    assert_eq!(fill(&imported.shapes[1]), Some([0, 0, 255, 255]));
    Ok(())
}

#[test]
fn hidden_groups() -> anyhow::Result<()> {
    let imported = import(
        r#"<svg>
            <g style="display:none">
                <path d="M0,0 L10,10"/>
                <path d="M0,0 L10,10" style="display:inline"/>
                <g display="inline"><path d="M0,0 L10,10"/></g>
            </g>
        </svg>"#,
    )?;
    assert_eq!(imported.shapes.len(), 3);
    for shape in &imported.shapes {
        assert_eq!(shape.attributes.get("display"), Some(&Value::from("none")));
    }

    let options = ImportOptions {
        skip_hidden: true,
        ..ImportOptions::default()
    };
    let imported = import_with_options(
        r#"<svg><g display="none"><path d="M0,0 L10,10"/></g><path d="M0,0 L1,1"/></svg>"#,
        &options,
    )?;
    assert_eq!(imported.shapes.len(), 1);
    Ok(())
}

#[test]
fn opacity_folds_into_color() -> anyhow::Result<()> {
    let imported = import(
        r##"<svg><path d="M0,0 L10,10" fill="#ff0000" fill-opacity="0.5"/></svg>"##,
    )?;
    let shape = &imported.shapes[0];
    assert_eq!(fill(shape), Some([255, 0, 0, 127]));
    assert!(!shape.attributes.contains_key("fill-opacity"));
    Ok(())
}

#[test]
fn style_and_transform() -> anyhow::Result<()> {
    let imported = import(
        r#"<svg>
            <g transform="translate(10)" style="stroke: black">
                <path d="M0,0 L1,1" transform="scale(2) rotate(90)" style="stroke-width:3"/>
            </g>
        </svg>"#,
    )?;
    let attributes = &imported.shapes[0].attributes;
    let transform = attributes
        .get("transform")
        .and_then(Value::as_transform)
        .expect("transform is resolved");
    let [x, y] = transform.apply([1.0, 0.0]);
    assert!((x - 10.0).abs() < 1e-9, "{x}");
    assert!((y - 2.0).abs() < 1e-9, "{y}");
    assert_eq!(
        attributes.iter().map(|(name, _)| name).collect::<Vec<_>>(),
        ["transform", "stroke", "stroke-width"]
    );
    Ok(())
}

#[test]
fn warnings_are_recovered() -> anyhow::Result<()> {
    let source = r#"<svg>
        <path id="missing"/>
        <polygon points="1,1"/>
        <path d="M0,0 L10,10 X 5"/>
        <path d="M0,0 A0,5 0 0 1 10,0 L5,5"/>
        <rect width="1" height="1" style="fill red"/>
    </svg>"#;
    let imported = import(source)?;
    assert_eq!(imported.shapes.len(), 3);
    assert_eq!(
        imported
            .warnings
            .iter()
            .map(|warning| warning.kind)
            .collect::<Vec<_>>(),
        [
            WarningKind::MissingAttribute,
            WarningKind::TooFewPoints,
            WarningKind::UnrecognizedCommand,
            WarningKind::DegenerateArc,
            WarningKind::StyleSyntaxError,
        ]
    );

    let unrecognized = &imported.warnings[2];
    assert_eq!(&source[unrecognized.span.clone()], "X");
    assert_eq!(imported.shapes[0].path.to_string(), "M 0,0 L 10,10");
    assert_eq!(imported.shapes[1].path.to_string(), "M 0,0 L 5,5");
    Ok(())
}

#[test]
fn malformed_documents_fail() {
    assert!(import("<svg><path></svg>").is_err());
    assert!(import("").is_err());
}

#[test]
fn round_trip() -> anyhow::Result<()> {
    let source = r##"<svg xmlns="http://www.w3.org/2000/svg">
        <g stroke="#000" stroke-opacity=".5">
            <rect x="5" y="5" width="10" height="10" fill="none"/>
            <circle cx="20" cy="10" r="5" fill="rgb(0, 128, 0)" opacity="0.8"/>
        </g>
    </svg>"##;
    let document = export(&import(source)?.shapes)?;
    insta::assert_snapshot!(document, @r##"
    <svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="20" height="10">
        <path d="M 5,5 L 15,5 L 15,15 L 5,15 L 5,5 Z" stroke="#000000" stroke-opacity="0.5" fill="none"/>
        <path d="M 25,10 C 25,12.761,22.761,15,20,15 C 17.239,15,15,12.761,15,10 C 15,7.239,17.239,5,20,5 C 22.761,5,25,7.239,25,10 Z" stroke="#000000" stroke-opacity="0.5" fill="#008000" opacity="0.8"/>
    </svg>
    "##);

    // paths lose precision when written, but attributes survive exactly
    let attributes = |shapes: Vec<Shape>| {
        shapes
            .into_iter()
            .map(|shape| shape.attributes)
            .collect::<Vec<_>>()
    };
    assert_eq!(
        attributes(import(&document)?.shapes),
        attributes(import(source)?.shapes)
    );
    Ok(())
}
