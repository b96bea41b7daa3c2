//! Touch coordinates to gestures
//!
//! Hit-tests presses against the fixed layout. Selector arrows click on
//! release, and only if the finger is still on the arrow. Sliders report
//! every value change while dragged and their settled value on release.

use lumalink_display::layout::{self, Region};
use lumalink_protocol::{ListId, ScalarId};

use super::gesture::{Gesture, StepDirection};
use crate::config::{RemoteConfig, SliderRange};
use crate::traits::TouchPoint;

/// What the current press started on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Arrow {
        list: ListId,
        direction: StepDirection,
        region: Region,
    },
    Slider {
        scalar: ScalarId,
        value: u8,
    },
    /// Empty space, or an arrow the finger slid off
    Nothing,
}

/// Tracks one press at a time and reports the gesture it forms
pub struct TouchRouter {
    brightness: SliderRange,
    speed: SliderRange,
    active: Option<Target>,
}

impl TouchRouter {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            brightness: config.brightness,
            speed: config.speed,
            active: None,
        }
    }

    /// Feed the latest touch sample, `None` when released
    pub fn update(&mut self, point: Option<TouchPoint>) -> Option<Gesture> {
        match (self.active, point) {
            (None, None) => None,
            (None, Some(point)) => {
                let (x, y) = coords(point);
                let target = self.hit(x, y);
                self.active = Some(target);
                match target {
                    Target::Slider { scalar, value } => {
                        Some(Gesture::SliderMoved { scalar, value })
                    }
                    _ => None,
                }
            }
            (Some(target), Some(point)) => {
                let (x, y) = coords(point);
                match target {
                    Target::Arrow { region, .. } if !region.contains(x, y) => {
                        self.active = Some(Target::Nothing);
                        None
                    }
                    Target::Slider { scalar, value } => {
                        let next = self.slider_value(scalar, x)?;
                        if next == value {
                            return None;
                        }
                        self.active = Some(Target::Slider {
                            scalar,
                            value: next,
                        });
                        Some(Gesture::SliderMoved {
                            scalar,
                            value: next,
                        })
                    }
                    _ => None,
                }
            }
            (Some(target), None) => {
                self.active = None;
                match target {
                    Target::Arrow {
                        list, direction, ..
                    } => Some(Gesture::SelectorStep { list, direction }),
                    Target::Slider { scalar, value } => {
                        Some(Gesture::SliderReleased { scalar, value })
                    }
                    Target::Nothing => None,
                }
            }
        }
    }

    fn hit(&self, x: i16, y: i16) -> Target {
        for list in ListId::ALL {
            let Some((previous, next)) = layout::selector_buttons(list) else {
                continue;
            };
            let arrows = [
                (previous, StepDirection::Previous),
                (next, StepDirection::Next),
            ];
            for (region, direction) in arrows {
                if region.contains(x, y) {
                    return Target::Arrow {
                        list,
                        direction,
                        region,
                    };
                }
            }
        }

        for scalar in [ScalarId::Brightness, ScalarId::Speed] {
            let on_track = layout::slider_track(scalar).is_some_and(|t| t.contains(x, y));
            if on_track {
                if let Some(value) = self.slider_value(scalar, x) {
                    return Target::Slider { scalar, value };
                }
            }
        }

        Target::Nothing
    }

    fn slider_value(&self, scalar: ScalarId, x: i16) -> Option<u8> {
        let range = match scalar {
            ScalarId::Brightness => self.brightness,
            ScalarId::Speed => self.speed,
            _ => return None,
        };
        let track = layout::slider_track(scalar)?;
        let value = layout::slider_value_at(track, x, i32::from(range.min), i32::from(range.max));
        u8::try_from(value).ok()
    }
}

fn coords(point: TouchPoint) -> (i16, i16) {
    let clamp = |v: u16| i16::try_from(v).unwrap_or(i16::MAX);
    (clamp(point.x), clamp(point.y))
}
