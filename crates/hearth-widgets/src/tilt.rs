//! Pointer-driven card tilt.

use hearth_common::WidgetError;

/// Cards further than this from the pointer (on either axis) stay flat.
pub const TILT_RADIUS: f64 = 500.0;
const DIVISOR: f64 = 30.0;
const SCALE: f64 = 0.05;

/// Card bounding box in page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Parse `X,Y,W,H`.
    pub fn parse(s: &str) -> Result<Self, WidgetError> {
        match parse_numbers(s)?.as_slice() {
            [left, top, width, height] => Ok(Self {
                left: *left,
                top: *top,
                width: *width,
                height: *height,
            }),
            _ => Err(WidgetError::InvalidInput(format!("expected X,Y,W,H, got {s:?}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    /// Parse `X,Y`.
    pub fn parse(s: &str) -> Result<Self, WidgetError> {
        match parse_numbers(s)?.as_slice() {
            [x, y] => Ok(Self { x: *x, y: *y }),
            _ => Err(WidgetError::InvalidInput(format!("expected X,Y, got {s:?}"))),
        }
    }
}

/// Rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Tilt of `card` for the pointer position, `None` when out of range.
pub fn tilt_for(card: &CardRect, pointer: &Pointer) -> Option<Tilt> {
    let (cx, cy) = card.center();
    if (cx - pointer.x).abs() >= TILT_RADIUS || (cy - pointer.y).abs() >= TILT_RADIUS {
        return None;
    }
    Some(Tilt {
        rotate_x: (cy - pointer.y) / DIVISOR * SCALE,
        rotate_y: (pointer.x - cx) / DIVISOR * SCALE,
    })
}

/// CSS transform for `card`; `"none"` when flat or the pointer has left.
pub fn transform_for(card: &CardRect, pointer: Option<&Pointer>) -> String {
    pointer
        .and_then(|p| tilt_for(card, p))
        .map(|t| t.transform())
        .unwrap_or_else(|| "none".to_string())
}

fn parse_numbers(s: &str) -> Result<Vec<f64>, WidgetError> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| WidgetError::InvalidInput(format!("{part:?}: {e}")))
        })
        .collect()
}
