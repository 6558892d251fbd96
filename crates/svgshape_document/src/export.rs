//! Writing paths back out as a document.
use svgshape_path::{bounds::Rect, command::format_number};

use crate::{
    attribute::Value,
    error::Error,
    options::ExportOptions,
    xmlwriter::{self, XmlWriter},
    Shape, SVG_NAMESPACE, XLINK_NAMESPACE,
};

/// Writes an `<svg>` document with a `<path>` for each shape
pub(crate) fn write(shapes: &[Shape], options: ExportOptions) -> Result<String, Error> {
    let (width, height) = shapes
        .iter()
        .filter_map(|shape| shape.path.bounding_box())
        .reduce(Rect::union)
        .map_or((0.0, 0.0), |bounds| {
            (bounds.width().round(), bounds.height().round())
        });

    let mut xml = XmlWriter::new(Vec::new(), options.into());
    xml.start_element("svg")?;
    xml.write_attribute("xmlns", SVG_NAMESPACE)?;
    xml.write_attribute("xmlns:xlink", XLINK_NAMESPACE)?;
    xml.write_attribute("width", &format_number(width))?;
    xml.write_attribute("height", &format_number(height))?;
    for shape in shapes {
        write_shape(&mut xml, shape)?;
    }
    let output = xml.end_document()?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}

fn write_shape(xml: &mut XmlWriter<Vec<u8>>, shape: &Shape) -> xmlwriter::Result {
    xml.start_element("path")?;
    xml.write_attribute("d", &shape.path)?;
    for (name, value) in &shape.attributes {
        match value {
            _ if name == "d" => log::debug!("`d` attribute is replaced by the path"),
            Value::Color(color) if color.a <= 0.0 => xml.write_attribute(name, "none")?,
            Value::Color(color) => {
                xml.write_attribute(name, &color.to_hex())?;
                if color.a < 1.0 {
                    xml.write_attribute(&format!("{name}-opacity"), &format_number(color.a))?;
                }
            }
            Value::Transform(transform) => xml.write_attribute(name, transform)?,
            Value::String(value) => xml.write_attribute(name, value)?,
        }
    }
    xml.end_element()
}

#[cfg(test)]
mod tests {
    use svgshape_path::{geometry::Point, Path};

    use super::*;
    use crate::{color::Color, transform::Transform};

    #[test]
    fn document() {
        let shapes = [
            Shape {
                path: Path::parse("M10,10 h20 v5 z"),
                attributes: [
                    ("fill", Value::from(Color::from_rgb8([255, 0, 0]))),
                    (
                        "stroke",
                        Value::from(Color {
                            a: 0.25,
                            ..Color::from_rgb8([0, 0, 255])
                        }),
                    ),
                    ("transform", Value::from(Transform::translate(1.0, 2.0))),
                    ("id", Value::from("a&b")),
                ]
                .into_iter()
                .collect(),
            },
            Shape {
                path: Path::ellipse(Point::new(0.0, 0.0), [2.0, 1.0]),
                attributes: [("fill", Color::NONE)].into_iter().collect(),
            },
        ];
        let output = write(&shapes, ExportOptions::default()).unwrap();
        insta::assert_snapshot!(output, @r##"
        <svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="32" height="16">
            <path d="M 10,10 L 30,10 L 30,15 Z" fill="#ff0000" stroke="#0000ff" stroke-opacity="0.25" transform="matrix(1 0 0 1 1 2)" id="a&amp;b"/>
            <path d="M 2,0 C 2,0.552,1.105,1,0,1 C -1.105,1,-2,0.552,-2,0 C -2,-0.552,-1.105,-1,0,-1 C 1.105,-1,2,-0.552,2,0 Z" fill="none"/>
        </svg>
        "##);
    }

    #[test]
    fn empty() {
        let output = write(
            &[],
            ExportOptions {
                indent: xmlwriter::Indent::None,
                use_single_quote: true,
            },
        )
        .unwrap();
        assert_eq!(
            output,
            "<svg xmlns='http://www.w3.org/2000/svg' xmlns:xlink='http://www.w3.org/1999/xlink' width='0' height='0'/>"
        );
    }
}
