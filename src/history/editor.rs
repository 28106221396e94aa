//! Linear undo/redo history over a single active image
//!
//! The history owns every buffer version it has produced. A successful edit
//! pushes the previous image onto the undo stack and clears the redo stack;
//! `undo` and `redo` move snapshots between the two stacks without
//! recomputing anything. Failed calls leave all three slots untouched.

use std::collections::VecDeque;

use tracing::debug;

use crate::history::operation::Operation;
use crate::io::error::{Result, StateViolation, invalid_parameter};
use crate::math::random::RandomSource;
use crate::pixel::{PixelBuffer, Point};

/// Current image plus undo and redo stacks
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    current: Option<PixelBuffer>,
    /// Most recent snapshot at the back
    undo: VecDeque<PixelBuffer>,
    /// Most recent snapshot at the back
    redo: Vec<PixelBuffer>,
    depth_limit: Option<usize>,
}

impl EditHistory {
    /// Create an empty, unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history keeping at most `limit` undo snapshots
    ///
    /// Once the limit is reached the oldest snapshot is discarded on each
    /// edit, so fewer steps can be undone than were performed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `limit` is zero
    pub fn with_depth_limit(limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(invalid_parameter(
                "depth_limit",
                &limit,
                &"history must keep at least one snapshot",
            ));
        }
        Ok(Self {
            depth_limit: Some(limit),
            ..Self::default()
        })
    }

    /// Maximum number of undo snapshots kept, if bounded
    pub const fn depth_limit(&self) -> Option<usize> {
        self.depth_limit
    }

    /// The active image
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded
    pub fn current(&self) -> Result<&PixelBuffer> {
        self.current
            .as_ref()
            .ok_or_else(|| StateViolation::NoImageLoaded.into())
    }

    /// Owned copy of the active image
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded
    pub fn snapshot(&self) -> Result<PixelBuffer> {
        self.current().cloned()
    }

    /// Whether an image is loaded
    pub const fn has_image(&self) -> bool {
        self.current.is_some()
    }

    /// Number of steps `undo` can take
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of steps `redo` can take
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Replace the active image with a decoded buffer
    pub fn load(&mut self, buffer: PixelBuffer) {
        debug!(
            width = buffer.width(),
            height = buffer.height(),
            "Loading image"
        );
        self.commit(buffer);
    }

    /// Run `operation` against the active image and record the result
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if a transformation runs with no image loaded,
    /// or `InvalidArgument` if a size or seed count is out of range
    pub fn apply(&mut self, operation: &Operation, random: &mut dyn RandomSource) -> Result<()> {
        let next = operation.render(self.current.as_ref(), random)?;
        debug!(%operation, "Recording edit");
        self.commit(next);
        Ok(())
    }

    /// Step back to the previous image
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the undo stack is empty
    pub fn undo(&mut self) -> Result<()> {
        let previous = self.undo.pop_back().ok_or(StateViolation::NothingToUndo)?;
        if let Some(current) = self.current.replace(previous) {
            self.redo.push(current);
        }
        debug!(undo = self.undo.len(), redo = self.redo.len(), "Undo");
        Ok(())
    }

    /// Step forward to the most recently undone image
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the redo stack is empty
    pub fn redo(&mut self) -> Result<()> {
        let next = self.redo.pop().ok_or(StateViolation::NothingToRedo)?;
        if let Some(current) = self.current.replace(next) {
            self.push_undo(current);
        }
        debug!(undo = self.undo.len(), redo = self.redo.len(), "Redo");
        Ok(())
    }

    /// Drop the active image and both stacks
    pub fn reset(&mut self) {
        self.current = None;
        self.undo.clear();
        self.redo.clear();
    }

    /// Blur the active image
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded
    pub fn blur(&mut self) -> Result<()> {
        self.apply_deterministic(&Operation::Blur)
    }

    /// Sharpen the active image
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded
    pub fn sharpen(&mut self) -> Result<()> {
        self.apply_deterministic(&Operation::Sharpen)
    }

    /// Convert the active image to greyscale
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded
    pub fn greyscale(&mut self) -> Result<()> {
        self.apply_deterministic(&Operation::Greyscale)
    }

    /// Sepia-tone the active image
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded
    pub fn sepia(&mut self) -> Result<()> {
        self.apply_deterministic(&Operation::Sepia)
    }

    /// Dither the active image to black and white
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded
    pub fn dither(&mut self) -> Result<()> {
        self.apply_deterministic(&Operation::Dither)
    }

    /// Mosaic the active image with `seeds` random seeds
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no image is loaded, or `InvalidArgument` if
    /// `seeds` is zero or exceeds the pixel count
    pub fn mosaic(&mut self, seeds: usize, random: &mut dyn RandomSource) -> Result<()> {
        self.apply(&Operation::Mosaic { seeds }, random)
    }

    /// Replace the active image with a checkerboard
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is zero
    pub fn checkerboard(&mut self, size: usize) -> Result<()> {
        self.apply_deterministic(&Operation::Checkerboard { size })
    }

    /// Replace the active image with a French flag
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is below 3
    pub fn french_flag(&mut self, size: usize) -> Result<()> {
        self.apply_deterministic(&Operation::FrenchFlag { size })
    }

    /// Replace the active image with a Greek flag
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is below 27
    pub fn greek_flag(&mut self, size: usize) -> Result<()> {
        self.apply_deterministic(&Operation::GreekFlag { size })
    }

    /// Replace the active image with a Swiss flag
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is below 32
    pub fn swiss_flag(&mut self, size: usize) -> Result<()> {
        self.apply_deterministic(&Operation::SwissFlag { size })
    }

    /// Replace the active image with a horizontal rainbow
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `height` is below 16 or `width` is zero
    pub fn horizontal_rainbow(&mut self, width: usize, height: usize) -> Result<()> {
        self.apply_deterministic(&Operation::HorizontalRainbow { width, height })
    }

    /// Replace the active image with a vertical rainbow
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `width` is below 16 or `height` is zero
    pub fn vertical_rainbow(&mut self, width: usize, height: usize) -> Result<()> {
        self.apply_deterministic(&Operation::VerticalRainbow { width, height })
    }

    // Only mosaic draws from the random source
    fn apply_deterministic(&mut self, operation: &Operation) -> Result<()> {
        self.apply(operation, &mut NoRandomness)
    }

    fn commit(&mut self, next: PixelBuffer) {
        if let Some(previous) = self.current.replace(next) {
            self.push_undo(previous);
        }
        self.redo.clear();
    }

    fn push_undo(&mut self, snapshot: PixelBuffer) {
        self.undo.push_back(snapshot);
        if let Some(limit) = self.depth_limit {
            let excess = self.undo.len().saturating_sub(limit);
            self.undo.drain(..excess);
        }
    }
}

/// Random source for operations that never sample
struct NoRandomness;

impl RandomSource for NoRandomness {
    fn draw_point(&mut self, _height: usize, _width: usize) -> Point {
        Point::new(0, 0)
    }
}
