//! Walking a document's shape elements into paths.
use std::ops::Range;

use itertools::Itertools;
use phf::phf_set;
use svgshape_parse::{Parse, Parser};
use svgshape_path::{command::Command, geometry::Point, Path};

use crate::{
    attribute::Value,
    error::{Error, Warning, WarningKind},
    options::{ImportOptions, Shapes},
    resolve::{resolve, Role},
    stack::GroupStack,
    visitor::{Visitor, Walk},
    Shape, SVG_NAMESPACE,
};

/// Containers whose content is never rendered directly
static NON_RENDERED: phf::Set<&'static str> = phf_set! {
    "clipPath", "defs", "desc", "filter", "linearGradient", "marker", "mask", "metadata",
    "pattern", "radialGradient", "script", "style", "symbol", "title",
};

/// The element was left out, with a warning already recorded
struct Skipped;

type Geometry = Result<Path, Skipped>;

/// Collects a path for each shape element, along with it's resolved attributes
pub(crate) struct Importer<'o> {
    options: &'o ImportOptions,
    stack: GroupStack,
    shapes: Vec<Shape>,
    warnings: Vec<Warning>,
}

impl<'o> Importer<'o> {
    pub fn new(options: &'o ImportOptions) -> Self {
        Self {
            options,
            stack: GroupStack::default(),
            shapes: vec![],
            warnings: vec![],
        }
    }

    pub fn finish(self) -> (Vec<Shape>, Vec<Warning>) {
        (self.shapes, self.warnings)
    }

    fn shape(&mut self, element: roxmltree::Node<'_, '_>, shape: Shapes) {
        let name = element.tag_name().name();
        if !self.options.shapes.contains(shape) {
            log::debug!("<{name}> is not imported");
            return;
        }
        let Ok(path) = self.geometry(element) else {
            return;
        };
        if path.0.is_empty() {
            log::debug!("<{name}> has no commands");
            return;
        }

        let attributes = resolve(
            element,
            &self.stack.inherited(),
            Role::Shape,
            &mut self.warnings,
        );
        if self.options.skip_hidden
            && attributes.get("display").and_then(Value::as_str) == Some("none")
        {
            log::debug!("<{name}> is hidden");
            return;
        }
        self.shapes.push(Shape { path, attributes });
    }

    fn geometry(&mut self, element: roxmltree::Node<'_, '_>) -> Geometry {
        match element.tag_name().name() {
            "path" => self.path(element),
            "rect" => self.rect(element),
            "circle" => self.circle(element),
            "ellipse" => self.ellipse(element),
            "line" => self.line(element),
            "polyline" => self.points(element, false),
            "polygon" => self.points(element, true),
            _ => Ok(Path::default()),
        }
    }

    fn path(&mut self, element: roxmltree::Node<'_, '_>) -> Geometry {
        let Some(d) = attribute(element, "d") else {
            return Err(self.missing(element, "d"));
        };
        let Range { start, end } = d.range_value();
        if d.value().trim().is_empty() {
            return Err(self.warn(
                element,
                WarningKind::MissingAttribute,
                "The `d` attribute is empty".to_string(),
                start..end,
            ));
        }
        let (path, errors) = Path::parse_with_errors(d.value());
        for error in &errors {
            let at = start + error.offset();
            self.warn(element, error.into(), error.to_string(), at..(at + 1).min(end));
        }
        Ok(path)
    }

    fn rect(&mut self, element: roxmltree::Node<'_, '_>) -> Geometry {
        let x = self.length(element, "x")?.unwrap_or(0.0);
        let y = self.length(element, "y")?.unwrap_or(0.0);
        let width = self.required_length(element, "width")?;
        let height = self.required_length(element, "height")?;
        if width <= 0.0 || height <= 0.0 {
            return Err(self.warn(
                element,
                WarningKind::InvalidAttribute,
                format!("A rect of {width}x{height} has no area"),
                element.range(),
            ));
        }

        let (rx, ry) = match (self.length(element, "rx")?, self.length(element, "ry")?) {
            (None, None) => (0.0, 0.0),
            (Some(r), None) | (None, Some(r)) => (r, r),
            (Some(rx), Some(ry)) => (rx, ry),
        };
        let rx = rx.clamp(0.0, width / 2.0);
        let ry = ry.clamp(0.0, height / 2.0);
        let (right, bottom) = (x + width, y + height);
        self.expect_finite(element, &[right, bottom])?;

        let definition = if rx > 0.0 && ry > 0.0 {
            let corner = |to_x: f64, to_y: f64| format!("A {rx} {ry} 0 0 1 {to_x},{to_y}");
            format!(
                "M {},{y} H {} {} V {} {} H {} {} V {} {} Z",
                x + rx,
                right - rx,
                corner(right, y + ry),
                bottom - ry,
                corner(right - rx, bottom),
                x + rx,
                corner(x, bottom - ry),
                y + ry,
                corner(x + rx, y),
            )
        } else {
            format!("M {x},{y} H {right} V {bottom} H {x} V {y} Z")
        };
        Ok(Path::parse(&definition))
    }

    fn circle(&mut self, element: roxmltree::Node<'_, '_>) -> Geometry {
        let center = self.center(element)?;
        let r = self.required_length(element, "r")?;
        self.expect_positive(element, "r", r)?;
        self.expect_finite(element, &extent(center, [r, r]))?;
        Ok(Path::ellipse(center, [r, r]))
    }

    fn ellipse(&mut self, element: roxmltree::Node<'_, '_>) -> Geometry {
        let center = self.center(element)?;
        let (rx, ry) = match (self.length(element, "rx")?, self.length(element, "ry")?) {
            (None, None) => return Err(self.missing(element, "rx")),
            (Some(r), None) | (None, Some(r)) => (r, r),
            (Some(rx), Some(ry)) => (rx, ry),
        };
        self.expect_positive(element, "rx", rx)?;
        self.expect_positive(element, "ry", ry)?;
        self.expect_finite(element, &extent(center, [rx, ry]))?;
        Ok(Path::ellipse(center, [rx, ry]))
    }

    fn line(&mut self, element: roxmltree::Node<'_, '_>) -> Geometry {
        let mut coordinates = [0.0; 4];
        for (coordinate, name) in coordinates.iter_mut().zip(["x1", "y1", "x2", "y2"]) {
            *coordinate = self.length(element, name)?.unwrap_or(0.0);
        }
        let [x1, y1, x2, y2] = coordinates;
        Ok(Path(vec![
            Command::MoveTo(Point::new(x1, y1)),
            Command::LineTo(Point::new(x2, y2)),
        ]))
    }

    fn points(&mut self, element: roxmltree::Node<'_, '_>, close: bool) -> Geometry {
        let Some(points) = attribute(element, "points") else {
            return Err(self.missing(element, "points"));
        };
        let input = &mut Parser::new(points.value());
        let mut coordinates = vec![];
        input.skip_whitespace();
        while !input.is_empty() {
            match f64::parse(input) {
                Ok(coordinate) => coordinates.push(coordinate),
                Err(error) => {
                    return Err(self.warn(
                        element,
                        WarningKind::InvalidAttribute,
                        format!("Invalid `points`: {error}"),
                        points.range_value(),
                    ))
                }
            }
            input.skip_separator();
        }
        if coordinates.len() % 2 == 1 {
            log::debug!("ignoring unpaired coordinate of `points`");
        }
        if coordinates.len() < 4 {
            return Err(self.warn(
                element,
                WarningKind::TooFewPoints,
                format!(
                    "At least 2 points are needed, found {}",
                    coordinates.len() / 2
                ),
                points.range_value(),
            ));
        }

        let mut definition = coordinates
            .chunks_exact(2)
            .enumerate()
            .map(|(i, pair)| {
                let command = if i == 0 { 'M' } else { 'L' };
                format!("{command} {},{}", pair[0], pair[1])
            })
            .join(" ");
        if close {
            definition.push_str(" Z");
        }
        Ok(Path::parse(&definition))
    }

    fn center(&mut self, element: roxmltree::Node<'_, '_>) -> Result<Point, Skipped> {
        Ok(Point::new(
            self.length(element, "cx")?.unwrap_or(0.0),
            self.length(element, "cy")?.unwrap_or(0.0),
        ))
    }

    /// Reads a numeric attribute, with an optional `px` unit
    fn length(
        &mut self,
        element: roxmltree::Node<'_, '_>,
        name: &str,
    ) -> Result<Option<f64>, Skipped> {
        let Some(attr) = attribute(element, name) else {
            return Ok(None);
        };
        let value = attr.value().trim();
        let value = value.strip_suffix("px").unwrap_or(value);
        f64::parse_string(value).map(Some).map_err(|error| {
            self.warn(
                element,
                WarningKind::InvalidAttribute,
                format!("Invalid `{name}` of `{}`: {error}", attr.value()),
                attr.range_value(),
            )
        })
    }

    fn required_length(
        &mut self,
        element: roxmltree::Node<'_, '_>,
        name: &str,
    ) -> Result<f64, Skipped> {
        match self.length(element, name)? {
            Some(length) => Ok(length),
            None => Err(self.missing(element, name)),
        }
    }

    fn expect_positive(
        &mut self,
        element: roxmltree::Node<'_, '_>,
        name: &str,
        length: f64,
    ) -> Result<(), Skipped> {
        if length > 0.0 {
            return Ok(());
        }
        let span = attribute(element, name).map_or_else(|| element.range(), |attr| attr.range_value());
        Err(self.warn(
            element,
            WarningKind::InvalidAttribute,
            format!("`{name}` must be positive, found {length}"),
            span,
        ))
    }

    /// Checks that the coordinates computed for a shape didn't overflow
    fn expect_finite(
        &mut self,
        element: roxmltree::Node<'_, '_>,
        coordinates: &[f64],
    ) -> Result<(), Skipped> {
        if coordinates.iter().all(|coordinate| coordinate.is_finite()) {
            return Ok(());
        }
        Err(self.warn(
            element,
            WarningKind::InvalidAttribute,
            "The shape's coordinates are too large".to_string(),
            element.range(),
        ))
    }

    fn missing(&mut self, element: roxmltree::Node<'_, '_>, name: &str) -> Skipped {
        self.warn(
            element,
            WarningKind::MissingAttribute,
            format!("The `{name}` attribute is required"),
            element.range(),
        )
    }

    fn warn(
        &mut self,
        element: roxmltree::Node<'_, '_>,
        kind: WarningKind,
        message: String,
        span: Range<usize>,
    ) -> Skipped {
        let warning = Warning {
            kind,
            element: element.tag_name().name().to_string(),
            message,
            span,
        };
        log::warn!("{warning}");
        self.warnings.push(warning);
        Skipped
    }
}

impl<'a, 'input: 'a> Visitor<'a, 'input> for Importer<'_> {
    type Error = Error;

    fn element(&mut self, element: roxmltree::Node<'a, 'input>) -> Result<Walk, Error> {
        let name = element.tag_name().name();
        if !is_svg(element) {
            log::debug!("skipping foreign element <{name}>");
            return Ok(Walk::Skip);
        }
        if NON_RENDERED.contains(name) {
            log::debug!("skipping non-rendered <{name}>");
            return Ok(Walk::Skip);
        }
        if is_group(element) {
            let frame = resolve(
                element,
                &self.stack.inherited(),
                Role::Group,
                &mut self.warnings,
            );
            self.stack.push(frame);
            log::debug!("entered <{name}>, depth {}", self.stack.depth());
            return Ok(Walk::Children);
        }
        if let Some(shape) = Shapes::from_element(name) {
            self.shape(element, shape);
            return Ok(Walk::Skip);
        }
        Ok(Walk::Children)
    }

    fn exit_element(&mut self, element: roxmltree::Node<'a, 'input>) -> Result<(), Error> {
        if is_group(element) {
            self.stack.pop();
            log::debug!("left <{}>", element.tag_name().name());
        }
        Ok(())
    }
}

/// The left, right, top and bottom of an ellipse
fn extent(center: Point, [rx, ry]: [f64; 2]) -> [f64; 4] {
    [
        center.x() - rx,
        center.x() + rx,
        center.y() - ry,
        center.y() + ry,
    ]
}

fn is_svg(element: roxmltree::Node<'_, '_>) -> bool {
    element
        .tag_name()
        .namespace()
        .is_none_or(|namespace| namespace == SVG_NAMESPACE)
}

fn is_group(element: roxmltree::Node<'_, '_>) -> bool {
    is_svg(element) && matches!(element.tag_name().name(), "g" | "a")
}

fn attribute<'a, 'input>(
    element: roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Attribute<'a, 'input>> {
    element
        .attributes()
        .find(|attr| attr.namespace().is_none() && attr.name() == name)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn import(source: &str) -> (Vec<Shape>, Vec<Warning>) {
        let document = roxmltree::Document::parse(source).unwrap();
        let options = ImportOptions::default();
        let mut importer = Importer::new(&options);
        importer.start(document.root_element()).unwrap();
        importer.finish()
    }

    fn data(shapes: &[Shape]) -> Vec<String> {
        shapes.iter().map(|shape| shape.path.to_string()).collect()
    }

    #[test]
    fn shapes() {
        let (shapes, warnings) = import(
            r#"<svg xmlns="http://www.w3.org/2000/svg">
                <rect x="1" y="2" width="3px" height="4"/>
                <line x2="5" y2="5"/>
                <polyline points="0,0 10,0 10,10"/>
                <polygon points="0 0, 10 0 10 10"/>
                <circle cx="5" cy="5" r="5"/>
            </svg>"#,
        );
        assert!(warnings.is_empty(), "{warnings:?}");
        let data = data(&shapes);
        assert_eq!(
            data[..4],
            [
                "M 1,2 L 4,2 L 4,6 L 1,6 L 1,2 Z",
                "M 0,0 L 5,5",
                "M 0,0 L 10,0 L 10,10",
                "M 0,0 L 10,0 L 10,10 Z",
            ]
        );
        assert!(data[4].starts_with("M 10,5 C "));
        assert_eq!(shapes.len(), 5);
    }

    #[test]
    fn rounded_rect() {
        let (shapes, _) = import(r#"<rect width="10" height="4" rx="5"/>"#);
        let path = &shapes[0].path;
        assert_eq!(path.0.first(), Some(&Command::MoveTo(Point::new(5.0, 0.0))));
        assert_eq!(path.0.last(), Some(&Command::ClosePath));
        // fitted corners bulge slightly past the rect
        let bounds = path.bounding_box().unwrap();
        assert!((bounds.width() - 10.0).abs() < 0.01);
        assert!((bounds.height() - 4.0).abs() < 0.01);
    }

    #[test]
    fn skipped_subtrees() {
        let (shapes, _) = import(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:x="https://example.com">
                <defs><path d="M0,0 L1,1"/></defs>
                <x:g><path d="M0,0 L2,2"/></x:g>
                <switch><path d="M0,0 L3,3"><title>line</title></path></switch>
            </svg>"#,
        );
        assert_eq!(data(&shapes), ["M 0,0 L 3,3"]);
    }

    #[test]
    fn groups_are_inherited() {
        let (shapes, _) = import(
            r#"<svg>
                <g stroke="blue" id="outer">
                    <a><path d="M0,0 L1,1" stroke-width="2"/></a>
                </g>
                <path d="M0,0 L1,1"/>
            </svg>"#,
        );
        let names: Vec<Vec<&str>> = shapes
            .iter()
            .map(|shape| shape.attributes.iter().map(|(name, _)| name).collect())
            .collect();
        assert_eq!(names, [vec!["stroke", "stroke-width"], vec![]]);
    }

    #[test]
    fn invalid_shapes() {
        let (shapes, warnings) = import(
            r#"<svg>
                <path/>
                <rect width="10"/>
                <rect width="0" height="10"/>
                <circle r="-1"/>
                <ellipse/>
                <polyline points="0,0"/>
                <polygon points="0,0 1,a"/>
                <line x1="one"/>
                <path d="M0,0 L1"/>
            </svg>"#,
        );
        assert_eq!(shapes.len(), 1);
        assert_eq!(
            warnings.iter().map(|warning| warning.kind).collect::<Vec<_>>(),
            [
                WarningKind::MissingAttribute,
                WarningKind::MissingAttribute,
                WarningKind::InvalidAttribute,
                WarningKind::InvalidAttribute,
                WarningKind::MissingAttribute,
                WarningKind::TooFewPoints,
                WarningKind::InvalidAttribute,
                WarningKind::InvalidAttribute,
                WarningKind::MalformedOperandCount,
            ]
        );
        assert_eq!(warnings[0].element, "path");
    }

    #[test]
    fn empty_and_overflowing_shapes() {
        let (shapes, warnings) = import(
            r#"<svg>
                <path d=""/>
                <path d="  "/>
                <rect x="1e308" width="1e308" height="1"/>
                <circle cx="-1e308" r="1e308"/>
                <ellipse cy="1e308" rx="1" ry="1e308"/>
            </svg>"#,
        );
        assert!(shapes.is_empty());
        assert_eq!(
            warnings.iter().map(|warning| warning.kind).collect::<Vec<_>>(),
            [
                WarningKind::MissingAttribute,
                WarningKind::MissingAttribute,
                WarningKind::InvalidAttribute,
                WarningKind::InvalidAttribute,
                WarningKind::InvalidAttribute,
            ]
        );
        assert_eq!(warnings[2].element, "rect");
    }

    #[test]
    fn filtered_shapes() {
        let document = roxmltree::Document::parse(
            r#"<svg><rect width="1" height="1"/><path d="M0,0 L1,1" display="none"/></svg>"#,
        )
        .unwrap();
        let options = ImportOptions {
            shapes: Shapes::RECT | Shapes::PATH,
            skip_hidden: true,
        };
        let mut importer = Importer::new(&options);
        importer.start(document.root_element()).unwrap();
        let (shapes, _) = importer.finish();
        assert_eq!(shapes.len(), 1);

        let options = ImportOptions {
            shapes: Shapes::PATH,
            skip_hidden: false,
        };
        let mut importer = Importer::new(&options);
        importer.start(document.root_element()).unwrap();
        let (shapes, _) = importer.finish();
        assert_eq!(data(&shapes), ["M 0,0 L 1,1"]);
    }
}
