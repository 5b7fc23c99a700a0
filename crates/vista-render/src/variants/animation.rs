//! Animation tracks and timelines.

use vista_core::{Result, Value};

use crate::renderer::{Renderer, Target};

/// `Animation::Track<K, V, R>`: keyframe count taken from `_data._size`.
#[derive(Debug)]
pub struct TrackRenderer<'v> {
    target: Target<'v>,
}

pub fn construct_track<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    Ok(Box::new(TrackRenderer { target }))
}

impl Renderer for TrackRenderer<'_> {
    fn kind(&self) -> &'static str {
        "track"
    }

    fn value(&self) -> &dyn Value {
        self.target.value
    }

    fn to_text(&self) -> Result<String> {
        let size = self.target.value.field("_data")?.field("_size")?;
        Ok(format!(
            "{} with {} keyframes",
            self.target.type_text(),
            self.target.registry.text_of(size.as_ref())?
        ))
    }
}

/// `Timeline`: whether it runs, and the last frame duration if so.
#[derive(Debug)]
pub struct TimelineRenderer<'v> {
    target: Target<'v>,
}

pub fn construct_timeline<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    Ok(Box::new(TimelineRenderer { target }))
}

impl TimelineRenderer<'_> {
    fn running(&self) -> Result<bool> {
        let flag = self.target.value.field("running")?;
        match flag.read_bool() {
            Ok(running) => Ok(running),
            Err(e) => match flag.to_text().trim() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(e),
            },
        }
    }
}

impl Renderer for TimelineRenderer<'_> {
    fn kind(&self) -> &'static str {
        "timeline"
    }

    fn value(&self) -> &dyn Value {
        self.target.value
    }

    fn to_text(&self) -> Result<String> {
        let ty = self.target.type_text();
        if !self.running()? {
            return Ok(format!("{ty} (not running)"));
        }
        Ok(format!(
            "{ty} (running; previous frame time: {}s)",
            self.target.field_text("_previousFrameDuration")?
        ))
    }
}
