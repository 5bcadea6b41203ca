//! Template loader - JSON emission templates
//!
//! Parses and validates [`EmissionTemplate`] lists. The simulation never re-checks a
//! template, so everything that would make one meaningless is rejected here.
//!
//! # Format
//!
//! A JSON array of records with camelCase keys:
//!
//! ```json
//! [
//!   {
//!     "count": 12,
//!     "launchDirection": "60, 120",
//!     "image": "*",
//!     "color": "Yellow",
//!     "lifetime": 1.5,
//!     "gravityScale": 1.0,
//!     "startSpeed": 14.0
//!   }
//! ]
//! ```
//!
//! `launchDirection` is either a `"min, max"` string or a `[min, max]` array, in
//! degrees (0 = right, 90 = up). `color` is a palette name, case-insensitive.
//! `gravityScale` and `startSpeed` default to 0 when omitted.
//!
//! # Example
//!
//! ```
//! use tui_particles_templates::load_templates_from_str;
//!
//! let templates = load_templates_from_str(
//!     r#"[{"count":1,"launchDirection":[90,90],"image":"o","color":"red","lifetime":1.0}]"#,
//! )
//! .unwrap();
//! assert_eq!(templates[0].glyph, 'o');
//! ```

use std::fs;
use std::path::Path;
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use tui_particles_types::{Color, EmissionTemplate};

pub use tui_particles_types as types;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed template JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("template {index}: {reason}")]
    Invalid { index: usize, reason: String },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DirectionRecord {
    Text(String),
    Pair([f32; 2]),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TemplateRecord {
    count: i64,
    launch_direction: DirectionRecord,
    image: String,
    color: String,
    lifetime: f32,
    #[serde(default)]
    gravity_scale: f32,
    #[serde(default)]
    start_speed: f32,
}

/// Parse and validate a template list.
pub fn load_templates_from_str(
    json: &str,
) -> Result<Vec<Rc<EmissionTemplate>>, TemplateError> {
    let records: Vec<TemplateRecord> = serde_json::from_str(json)?;
    let templates = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            validate(record)
                .map(Rc::new)
                .map_err(|reason| TemplateError::Invalid { index, reason })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = templates.len(), "templates loaded");
    Ok(templates)
}

pub fn load_templates_from_path(
    path: impl AsRef<Path>,
) -> Result<Vec<Rc<EmissionTemplate>>, TemplateError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| TemplateError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_templates_from_str(&json)
}

fn validate(record: TemplateRecord) -> Result<EmissionTemplate, String> {
    let count = u32::try_from(record.count)
        .map_err(|_| format!("count {} out of range", record.count))?;

    let (min, max) = match record.launch_direction {
        DirectionRecord::Pair([min, max]) => (min, max),
        DirectionRecord::Text(text) => parse_range(&text)?,
    };
    if !(min.is_finite() && max.is_finite()) || min > max {
        return Err(format!("launchDirection ({}, {}) is not an ordered range", min, max));
    }

    let mut chars = record.image.chars();
    let glyph = match (chars.next(), chars.next()) {
        (Some(ch), None) => ch,
        _ => return Err(format!("image {:?} must be exactly one character", record.image)),
    };

    let color = record.color.parse::<Color>().map_err(|e| e.to_string())?;

    if !(record.lifetime > 0.0 && record.lifetime.is_finite()) {
        return Err(format!("lifetime {} must be positive", record.lifetime));
    }
    if !(record.start_speed >= 0.0 && record.start_speed.is_finite()) {
        return Err(format!("startSpeed {} must be non-negative", record.start_speed));
    }
    if !record.gravity_scale.is_finite() {
        return Err("gravityScale must be finite".to_string());
    }

    Ok(EmissionTemplate {
        count,
        direction_range: (min, max),
        glyph,
        color,
        lifetime_seconds: record.lifetime,
        gravity_scale: record.gravity_scale,
        start_speed: record.start_speed,
    })
}

/// Parse the `"min, max"` form.
fn parse_range(text: &str) -> Result<(f32, f32), String> {
    let mut parts = text.split(',').map(str::trim);
    let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("launchDirection {:?} must be \"min, max\"", text));
    };
    let parse = |s: &str| {
        s.parse::<f32>()
            .map_err(|_| format!("launchDirection value {:?} is not a number", s))
    };
    Ok((parse(a)?, parse(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(record: &str) -> Result<Vec<Rc<EmissionTemplate>>, TemplateError> {
        load_templates_from_str(&format!("[{}]", record))
    }

    fn reason(err: TemplateError) -> String {
        match err {
            TemplateError::Invalid { reason, .. } => reason,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_parses_string_direction() {
        let t = one(
            r#"{"count":3,"launchDirection":" 45 , 135 ","image":"+","color":"DarkYellow",
                "lifetime":2.5,"gravityScale":-0.5,"startSpeed":8}"#,
        )
        .unwrap();
        let t = &t[0];
        assert_eq!(t.count, 3);
        assert_eq!(t.direction_range, (45.0, 135.0));
        assert_eq!(t.glyph, '+');
        assert_eq!(t.color, Color::DarkYellow);
        assert_eq!(t.lifetime_seconds, 2.5);
        assert_eq!(t.gravity_scale, -0.5);
        assert_eq!(t.start_speed, 8.0);
    }

    #[test]
    fn test_parses_array_direction_and_defaults() {
        let t = one(
            r#"{"count":0,"launchDirection":[10,10],"image":"·",
                "color":"white","lifetime":1}"#,
        )
        .unwrap();
        assert_eq!(t[0].count, 0);
        assert_eq!(t[0].direction_range, (10.0, 10.0));
        assert_eq!(t[0].glyph, '·');
        assert_eq!(t[0].gravity_scale, 0.0);
        assert_eq!(t[0].start_speed, 0.0);
    }

    #[test]
    fn test_rejects_reversed_range() {
        let err = one(
            r#"{"count":1,"launchDirection":"90, 10","image":"*",
                "color":"Red","lifetime":1}"#,
        )
        .unwrap_err();
        assert!(reason(err).contains("launchDirection"));
    }

    #[test]
    fn test_rejects_bad_lifetime_and_speed() {
        let err = one(
            r#"{"count":1,"launchDirection":"0,1","image":"*",
                "color":"Red","lifetime":0}"#,
        )
        .unwrap_err();
        assert!(reason(err).contains("lifetime"));

        let err = one(
            r#"{"count":1,"launchDirection":"0,1","image":"*",
                "color":"Red","lifetime":1,"startSpeed":-2}"#,
        )
        .unwrap_err();
        assert!(reason(err).contains("startSpeed"));
    }

    #[test]
    fn test_rejects_negative_count_and_long_image() {
        let err = one(
            r#"{"count":-1,"launchDirection":"0,1","image":"*",
                "color":"Red","lifetime":1}"#,
        )
        .unwrap_err();
        assert!(reason(err).contains("count"));

        let err = one(
            r#"{"count":1,"launchDirection":"0,1","image":"**",
                "color":"Red","lifetime":1}"#,
        )
        .unwrap_err();
        assert!(reason(err).contains("image"));
    }

    #[test]
    fn test_rejects_unknown_color() {
        let err = one(
            r#"{"count":1,"launchDirection":"0,1","image":"*",
                "color":"Orange","lifetime":1}"#,
        )
        .unwrap_err();
        assert!(reason(err).contains("Orange"));
    }

    #[test]
    fn test_error_reports_record_index() {
        let json = r#"[
            {"count":1,"launchDirection":"0,1","image":"*","color":"Red","lifetime":1},
            {"count":1,"launchDirection":"0,1,2","image":"*","color":"Red","lifetime":1}
        ]"#;
        match load_templates_from_str(json) {
            Err(TemplateError::Invalid { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(load_templates_from_str("{"), Err(TemplateError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_templates_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, TemplateError::Io { .. }));
        assert!(err.to_string().contains("not/here.json"));
    }
}
