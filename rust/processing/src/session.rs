// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Box definition session
//!
//! Holds the selection, the working box and the feature values for one run
//! of the sinter box command. The working box is always re-derived from the
//! selection bounds: initialize, place the six manipulators on its face
//! centers, then push each face out by its offset.

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use sinterbox_core::{ensure_non_negative, ensure_positive, Direction, DirectionMap, FeatureValues};
use sinterbox_geometry::{
    recommend_gap, shell_boxes, union_bounding_box, AxisAlignedBox, CutBox, GapLayout, Point3,
    ReferenceFrame, ShellBoxes, Solid, SolidKernel, Vector3,
};

/// Measurements of a selected body, kept for gap sizing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySummary {
    pub bounds: AxisAlignedBox,
    pub principal_extents: Vector3<f64>,
}

impl BodySummary {
    pub fn of<S: Solid>(body: &S) -> Self {
        Self {
            bounds: body.bounding_box(),
            principal_extents: body.principal_extents(),
        }
    }
}

impl Solid for BodySummary {
    fn bounding_box(&self) -> AxisAlignedBox {
        self.bounds
    }

    fn principal_extents(&self) -> Vector3<f64> {
        self.principal_extents
    }
}

/// One of the six face manipulators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalOffset {
    pub direction: Direction,
    /// Unit vector out of the face
    pub vector: Vector3<f64>,
    /// Face center of the selection box
    pub origin: Point3<f64>,
    pub distance: f64,
}

impl DirectionalOffset {
    /// Point the face is pushed out to
    pub fn tip(&self) -> Point3<f64> {
        self.origin + self.vector * self.distance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    ShellOnly,
    ShellWithGaps,
}

/// Descriptors for drawing the box; no solids are built for a preview
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub mode: PreviewMode,
    pub shell: ShellBoxes,
    /// Empty in [`PreviewMode::ShellOnly`]
    pub cuts: Vec<CutBox>,
}

/// Settled copy of everything a layout reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub values: FeatureValues,
    pub working_box: AxisAlignedBox,
    pub frame: ReferenceFrame,
}

impl Snapshot {
    pub fn shell(&self) -> Result<ShellBoxes> {
        Ok(shell_boxes(
            &self.working_box,
            self.values.shell_thickness,
            &self.frame,
        )?)
    }

    pub fn layout(&self) -> Result<GapLayout> {
        Ok(GapLayout::compute(&self.working_box, &self.values, &self.frame)?)
    }

    pub fn preview(&self, mode: PreviewMode) -> Result<Preview> {
        let shell = self.shell()?;
        let cuts = match mode {
            PreviewMode::ShellOnly => Vec::new(),
            PreviewMode::ShellWithGaps => self.layout()?.cut_boxes(),
        };
        Ok(Preview { mode, shell, cuts })
    }
}

/// Finished sinter box
#[derive(Debug, Clone)]
pub struct SinterBox<S> {
    /// Component name from the configuration
    pub name: String,
    pub solid: S,
    /// Number of gap cuts subtracted from the shell
    pub cut_count: usize,
}

/// State of one sinter box command
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    frame: ReferenceFrame,
    values: FeatureValues,
    /// Union of the selection bounds
    base_box: AxisAlignedBox,
    /// `base_box` grown by the offsets
    working_box: AxisAlignedBox,
    origins: DirectionMap<Point3<f64>>,
    selection: Vec<BodySummary>,
    auto_size_gaps: bool,
    full_preview: bool,
    dragging: bool,
    preview: Option<Preview>,
}

impl Session {
    /// Start a session with nothing selected
    ///
    /// Feature values default from the configured units; the working box is
    /// the fallback box grown by the default offsets.
    pub fn new(config: SessionConfig) -> Self {
        let fallback = AxisAlignedBox::fallback();
        let mut session = Self {
            frame: ReferenceFrame::standard(),
            values: FeatureValues::defaults_for(config.units),
            base_box: fallback,
            working_box: fallback,
            origins: DirectionMap::splat(Point3::origin()),
            selection: Vec::new(),
            auto_size_gaps: config.auto_size_gaps,
            full_preview: config.full_preview,
            dragging: false,
            preview: None,
            config,
        };
        session.rebuild_box();
        tracing::debug!(units = %session.config.units, "Sinter box session started");
        session
    }

    /// Use `frame` for the face directions and box construction
    pub fn with_frame(mut self, frame: ReferenceFrame) -> Self {
        self.frame = frame;
        self.rebuild_box();
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn frame(&self) -> &ReferenceFrame {
        &self.frame
    }

    pub fn values(&self) -> &FeatureValues {
        &self.values
    }

    pub fn base_box(&self) -> &AxisAlignedBox {
        &self.base_box
    }

    pub fn working_box(&self) -> &AxisAlignedBox {
        &self.working_box
    }

    pub fn selection(&self) -> &[BodySummary] {
        &self.selection
    }

    pub fn auto_size_gaps(&self) -> bool {
        self.auto_size_gaps
    }

    pub fn full_preview(&self) -> bool {
        self.full_preview
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Reset the working box to `bounds`
    pub fn initialize_box(&mut self, bounds: AxisAlignedBox) {
        self.working_box = bounds;
        self.preview = None;
    }

    /// Move every manipulator to the matching face center of the working box
    pub fn update_manipulators(&mut self) {
        let bounds = self.working_box;
        self.origins = DirectionMap::from_fn(|direction| bounds.face_center(direction));
    }

    /// Grow the working box to include each manipulator tip
    pub fn expand_box_in_directions(&mut self) {
        for offset in self.offsets().values() {
            self.working_box.expand(&offset.tip());
        }
        self.preview = None;
    }

    /// The six manipulators with their current distances
    pub fn offsets(&self) -> DirectionMap<DirectionalOffset> {
        DirectionMap::from_fn(|direction| DirectionalOffset {
            direction,
            vector: self.frame.direction(direction),
            origin: self.origins[direction],
            distance: self.values.offset(direction),
        })
    }

    fn rebuild_box(&mut self) {
        self.initialize_box(self.base_box);
        self.update_manipulators();
        self.expand_box_in_directions();
    }

    /// Replace the selection and re-derive the working box
    ///
    /// With automatic gaps on and at least one body, the gap is resized to
    /// suit the new selection. An empty selection falls back to the unit box.
    pub fn update_selections<S: Solid>(&mut self, bodies: &[S]) -> Result<()> {
        self.selection = bodies.iter().map(BodySummary::of).collect();
        self.base_box = union_bounding_box(bodies);
        self.rebuild_box();
        tracing::debug!(count = bodies.len(), "Selection updated");

        if self.auto_size_gaps && !self.selection.is_empty() {
            self.recompute_gap()?;
        }
        Ok(())
    }

    /// Size the gap for the current selection and working box
    ///
    /// A recommendation that is not a valid gap (a body with two zero
    /// extents yields zero) is rejected and the previous gap kept.
    pub fn recompute_gap(&mut self) -> Result<f64> {
        let gap = recommend_gap(
            &self.selection,
            &self.working_box,
            self.values.shell_thickness,
            self.values.bar,
            &self.frame,
        )?;
        self.values.gap = ensure_positive("gap", gap)?;
        self.preview = None;
        tracing::debug!(gap, "Gap sized automatically");
        Ok(gap)
    }

    pub fn set_thickness(&mut self, value: f64) -> Result<()> {
        self.values.shell_thickness = ensure_positive("shell_thickness", value)?;
        self.preview = None;
        Ok(())
    }

    pub fn set_bar(&mut self, value: f64) -> Result<()> {
        self.values.bar = ensure_positive("bar", value)?;
        self.preview = None;
        Ok(())
    }

    pub fn set_gap(&mut self, value: f64) -> Result<()> {
        self.values.gap = ensure_positive("gap", value)?;
        self.preview = None;
        Ok(())
    }

    /// Set how far the face `direction` is pushed out from the selection
    pub fn set_offset(&mut self, direction: Direction, value: f64) -> Result<()> {
        let value = ensure_non_negative(direction.key(), value)?;
        self.values.set_offset(direction, value);
        self.rebuild_box();
        Ok(())
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Turning automatic gaps on resizes the gap for the current selection
    pub fn set_auto_size_gaps(&mut self, enabled: bool) -> Result<()> {
        self.auto_size_gaps = enabled;
        if enabled && !self.selection.is_empty() {
            self.recompute_gap()?;
        }
        Ok(())
    }

    pub fn set_full_preview(&mut self, enabled: bool) {
        self.full_preview = enabled;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            values: self.values,
            working_box: self.working_box,
            frame: self.frame,
        }
    }

    pub fn preview_shell_only(&mut self) -> Result<&Preview> {
        self.cached_preview(PreviewMode::ShellOnly)
    }

    pub fn preview_shell_with_gaps(&mut self) -> Result<&Preview> {
        self.cached_preview(PreviewMode::ShellWithGaps)
    }

    /// Shell only while dragging or with full preview off, else shell and gaps
    pub fn preview(&mut self) -> Result<&Preview> {
        if self.dragging || !self.full_preview {
            self.preview_shell_only()
        } else {
            self.preview_shell_with_gaps()
        }
    }

    pub fn last_preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    fn cached_preview(&mut self, mode: PreviewMode) -> Result<&Preview> {
        let snapshot = self.snapshot();
        if !matches!(&self.preview, Some(preview) if preview.mode == mode) {
            let preview = snapshot.preview(mode)?;
            if mode == PreviewMode::ShellWithGaps {
                tracing::debug!(cuts = preview.cuts.len(), "Full preview computed");
            }
            self.preview = Some(preview);
        }
        Ok(self.preview.as_ref().expect("preview cached above"))
    }

    /// Build the shell and subtract every gap from it
    ///
    /// Nothing is returned unless every kernel call succeeds.
    pub fn finalize_solid<K: SolidKernel>(&mut self, kernel: &K) -> Result<SinterBox<K::Solid>> {
        if self.selection.is_empty() {
            return Err(Error::EmptySelection);
        }
        self.preview = None;

        let snapshot = self.snapshot();
        snapshot.values.validate()?;
        let shell = snapshot.shell()?;
        let cuts = snapshot.layout()?.cut_boxes();

        tracing::info!(
            name = %self.config.component_name,
            cuts = cuts.len(),
            thickness = snapshot.values.shell_thickness,
            gap = snapshot.values.gap,
            bar = snapshot.values.bar,
            "Building sinter box"
        );

        let mut solid = logged("shell", shell.build(kernel))?;
        for cut in &cuts {
            let tool = logged("gap", kernel.create_box(&cut.bounds))?;
            solid = logged("gap", kernel.subtract(&solid, &tool))?;
        }

        tracing::info!(cuts = cuts.len(), "Sinter box complete");
        Ok(SinterBox {
            name: self.config.component_name.clone(),
            solid,
            cut_count: cuts.len(),
        })
    }

    /// Close the session and drop any preview
    pub fn end(mut self) {
        self.preview = None;
        tracing::debug!(bodies = self.selection.len(), "Sinter box session ended");
    }
}

fn logged<T>(stage: &'static str, result: sinterbox_geometry::Result<T>) -> Result<T> {
    result.map_err(|err| {
        tracing::warn!(stage, error = %err, "Kernel operation failed");
        Error::from(err)
    })
}
