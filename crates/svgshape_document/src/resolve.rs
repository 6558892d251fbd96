//! Resolution of an element's presentation attributes onto those it inherits.
use std::ops::Range;

use phf::phf_set;
use svgshape_parse::Parse;

use crate::{
    attribute::{AttributeMap, Value},
    color::{Color, Paint},
    error::{Warning, WarningKind},
    style,
    transform::Transform,
};

/// Attributes describing the geometry of a shape, rather than how it's presented
pub static GEOMETRY_ATTRIBUTES: phf::Set<&'static str> = phf_set! {
    "d", "points", "x", "y", "width", "height", "rx", "ry", "cx", "cy", "r", "x1", "y1",
    "x2", "y2",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the resolved attributes will be used for
pub enum Role {
    /// A frame of the group stack, inherited by descendants
    Group,
    /// The attributes of an imported path
    Shape,
}

struct Own<'a> {
    name: &'a str,
    value: &'a str,
    span: Range<usize>,
}

/// Overlays the element's own attributes, and then it's inline style, onto the inherited
/// attributes.
pub fn resolve(
    element: roxmltree::Node<'_, '_>,
    inherited: &AttributeMap,
    role: Role,
    warnings: &mut Vec<Warning>,
) -> AttributeMap {
    let warn = |warnings: &mut Vec<Warning>, kind, message: String, span| {
        let warning = Warning {
            kind,
            element: element.tag_name().name().to_string(),
            message,
            span,
        };
        log::warn!("{warning}");
        warnings.push(warning);
    };

    let mut own: Vec<Own<'_>> = element
        .attributes()
        .filter(|attr| attr.namespace().is_none())
        .filter(|attr| !GEOMETRY_ATTRIBUTES.contains(attr.name()) && attr.name() != "style")
        .filter(|attr| role == Role::Shape || attr.name() != "id")
        .map(|attr| Own {
            name: attr.name(),
            value: attr.value(),
            span: attr.range_value(),
        })
        .collect();

    if let Some(attr) = element
        .attributes()
        .find(|attr| attr.namespace().is_none() && attr.name() == "style")
    {
        let start = attr.range_value().start;
        match style::parse(attr.value()) {
            Ok(declarations) => own.extend(
                declarations
                    .into_iter()
                    .filter(|declaration| {
                        // a shape can't hide itself through it's own style
                        role == Role::Group
                            || declaration.name != "display"
                            || declaration.value != "none"
                    })
                    .map(|declaration| Own {
                        name: declaration.name,
                        value: declaration.value,
                        span: start + declaration.range.0..start + declaration.range.1,
                    }),
            ),
            Err(error) => warn(
                warnings,
                WarningKind::StyleSyntaxError,
                format!("The style `{}` was discarded: {error}", attr.value()),
                attr.range_value(),
            ),
        }
    }
    // `currentColor` refers to the element's own `color`
    own.sort_by_key(|own| own.name != "color");

    let is_hidden = inherited
        .get("display")
        .and_then(Value::as_str)
        .is_some_and(|display| display == "none");
    let mut attributes = inherited.clone();
    for Own { name, value, span } in own {
        match name {
            "display" if is_hidden => {
                log::debug!("ignoring `display: {value}` within a hidden group");
            }
            "fill" | "stroke" | "color" => match Paint::parse_string(value) {
                Ok(Paint::Color(color)) => {
                    attributes.insert(name, color);
                }
                Ok(Paint::CurrentColor) => match attributes.get("color").and_then(Value::as_color) {
                    Some(color) => {
                        let color = *color;
                        attributes.insert(name, color);
                    }
                    None => {
                        attributes.insert(name, value);
                    }
                },
                Err(error) if is_color_syntax(value) => warn(
                    warnings,
                    WarningKind::InvalidAttribute,
                    format!("Invalid color `{value}` for `{name}`: {error}"),
                    span,
                ),
                Err(_) => {
                    attributes.insert(name, value);
                }
            },
            "transform" => match Transform::parse_string(value) {
                Ok(transform) => {
                    // a transform in the style replaces the attribute rather than adding to it
                    let transform = match inherited.get(name).and_then(Value::as_transform) {
                        Some(outer) => outer.then(&transform),
                        None => transform,
                    };
                    attributes.insert(name, transform);
                }
                Err(error) => warn(
                    warnings,
                    WarningKind::InvalidAttribute,
                    format!("Invalid transform `{value}`: {error}"),
                    span,
                ),
            },
            _ => {
                attributes.insert(name, value.trim());
            }
        }
    }

    if role == Role::Shape {
        fold_opacity(&mut attributes, "fill", "fill-opacity");
        fold_opacity(&mut attributes, "stroke", "stroke-opacity");
    }
    attributes
}

fn is_color_syntax(value: &str) -> bool {
    let value = value.trim_start();
    value.starts_with('#')
        || value
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("rgb("))
}

/// Multiplies a partial opacity into the paint's alpha, removing the opacity attribute
fn fold_opacity(attributes: &mut AttributeMap, paint: &str, opacity: &str) {
    let Some(Value::Color(color)) = attributes.get(paint) else {
        return;
    };
    let Some(value) = attributes.get(opacity).and_then(Value::as_str) else {
        return;
    };
    let Some(factor) = parse_opacity(value) else {
        log::debug!("keeping unparsable `{opacity}: {value}`");
        return;
    };
    if factor >= 1.0 {
        return;
    }
    let color = Color {
        a: color.a * factor,
        ..*color
    };
    attributes.insert(paint, color);
    attributes.remove(opacity);
}

fn parse_opacity(value: &str) -> Option<f64> {
    let value = value.trim();
    let opacity = match value.strip_suffix('%') {
        Some(percentage) => f64::parse_string(percentage).ok()? / 100.0,
        None => f64::parse_string(value).ok()?,
    };
    Some(opacity.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn resolve_first(source: &str, inherited: &AttributeMap, role: Role) -> AttributeMap {
        let document = roxmltree::Document::parse(source).unwrap();
        let mut warnings = vec![];
        let attributes = resolve(document.root_element(), inherited, role, &mut warnings);
        assert!(warnings.is_empty(), "{warnings:?}");
        attributes
    }

    #[test]
    fn own_attributes_win() {
        let inherited: AttributeMap = [("fill", "red"), ("stroke-width", "2")].into_iter().collect();
        let attributes = resolve_first(
            r#"<path d="M0,0" fill="blue" style="stroke-width: 4; opacity:.5" id="a"/>"#,
            &inherited,
            Role::Shape,
        );
        assert_eq!(
            attributes.get("fill").and_then(Value::as_color).map(Color::to_rgba8),
            Some([0, 0, 255, 255])
        );
        assert_eq!(attributes.get("stroke-width"), Some(&Value::from("4")));
        assert_eq!(attributes.get("opacity"), Some(&Value::from(".5")));
        assert_eq!(attributes.get("id"), Some(&Value::from("a")));
        assert!(!attributes.contains_key("d"));
    }

    #[test]
    fn groups_do_not_pass_on_ids() {
        let attributes = resolve_first(r#"<g id="group" fill="red"/>"#, &AttributeMap::new(), Role::Group);
        assert!(!attributes.contains_key("id"));
        assert!(attributes.contains_key("fill"));
    }

    #[test]
    fn display_rules() {
        let hidden = resolve_first(r#"<g style="display:none"/>"#, &AttributeMap::new(), Role::Group);
        assert_eq!(hidden.get("display"), Some(&Value::from("none")));

        let child = resolve_first(r#"<path display="inline"/>"#, &hidden, Role::Shape);
        assert_eq!(child.get("display"), Some(&Value::from("none")));

        let child = resolve_first(r#"<path style="display:none"/>"#, &AttributeMap::new(), Role::Shape);
        assert!(!child.contains_key("display"));
    }

    #[test]
    fn current_color() {
        let attributes = resolve_first(
            r##"<path fill="currentColor" stroke="currentColor" color="#00ff00"/>"##,
            &AttributeMap::new(),
            Role::Shape,
        );
        assert_eq!(
            attributes.get("fill").and_then(Value::as_color).map(Color::to_rgba8),
            Some([0, 255, 0, 255])
        );

        let attributes = resolve_first(r#"<path fill="currentColor"/>"#, &AttributeMap::new(), Role::Shape);
        assert_eq!(attributes.get("fill"), Some(&Value::from("currentColor")));
    }

    #[test]
    fn opacity_folding() {
        let attributes = resolve_first(
            r##"<path fill="#ff0000" fill-opacity="0.5" stroke="none" stroke-opacity="50%"/>"##,
            &AttributeMap::new(),
            Role::Shape,
        );
        assert_eq!(
            attributes.get("fill").and_then(Value::as_color).map(Color::to_rgba8),
            Some([255, 0, 0, 127])
        );
        assert!(!attributes.contains_key("fill-opacity"));
        assert!(!attributes.contains_key("stroke-opacity"));

        let attributes = resolve_first(
            r#"<path fill="url(#gradient)" fill-opacity="0.5"/>"#,
            &AttributeMap::new(),
            Role::Shape,
        );
        assert_eq!(attributes.get("fill"), Some(&Value::from("url(#gradient)")));
        assert_eq!(attributes.get("fill-opacity"), Some(&Value::from("0.5")));

        let attributes = resolve_first(
            r##"<path fill="#ff0000" fill-opacity="1"/>"##,
            &AttributeMap::new(),
            Role::Shape,
        );
        assert_eq!(
            attributes.get("fill").and_then(Value::as_color).map(Color::to_rgba8),
            Some([255, 0, 0, 255])
        );
        assert_eq!(attributes.get("fill-opacity"), Some(&Value::from("1")));
    }

    #[test]
    fn transforms_compose() {
        let inherited: AttributeMap = [("transform", Transform::translate(10.0, 0.0))]
            .into_iter()
            .collect();
        let attributes = resolve_first(r#"<path transform="scale(2)"/>"#, &inherited, Role::Shape);
        let transform = attributes.get("transform").and_then(Value::as_transform).unwrap();
        assert_eq!(transform.apply([1.0, 1.0]), [12.0, 2.0]);

        let attributes = resolve_first(
            r#"<path transform="scale(2)" style="transform: scale(3)"/>"#,
            &inherited,
            Role::Shape,
        );
        let transform = attributes.get("transform").and_then(Value::as_transform).unwrap();
        assert_eq!(transform.apply([1.0, 1.0]), [13.0, 3.0]);
    }

    #[test]
    fn invalid_values_warn() {
        let document = roxmltree::Document::parse(
            r##"<path fill="#12" transform="spin(1)" style="fill red"/>"##,
        )
        .unwrap();
        let mut warnings = vec![];
        let attributes = resolve(
            document.root_element(),
            &AttributeMap::new(),
            Role::Shape,
            &mut warnings,
        );
        assert!(attributes.is_empty());
        assert_eq!(
            warnings.iter().map(|warning| warning.kind).collect::<Vec<_>>(),
            [
                WarningKind::StyleSyntaxError,
                WarningKind::InvalidAttribute,
                WarningKind::InvalidAttribute
            ]
        );
        assert_eq!(warnings[0].span, 44..52);
    }
}
