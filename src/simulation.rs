use crate::{DisplayDriver, FrameTimer, GameOfLife, Result};
use std::convert::Infallible;
use tracing::trace;

/// Drives `life` forever: clear the display, draw the current generation,
/// step to the next one and wait for the rest of the frame.
///
/// Only returns if the display fails.
pub fn run<D, const HEIGHT: usize, const WIDTH: usize>(
    life: &mut GameOfLife<HEIGHT, WIDTH>,
    display: &mut D,
    timer: &mut FrameTimer,
) -> Result<Infallible>
where
    D: DisplayDriver + ?Sized,
{
    loop {
        display.clear()?;
        let frame = life.advance();
        display.write(&frame)?;
        timer.delay();
        trace!(fps = timer.fps(), generation = life.generation(), "frame done");
    }
}
