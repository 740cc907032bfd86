/// Frustum fitter: brings an object's projected silhouette inside a camera frame.
///
/// One call walks a fixed sequence of stages:
///
/// ```text
/// CHECK_DEPTH → (RECENTER, bounded) → SCALE → (TRANSLATE) → DONE
/// ```
///
/// Scene state is read and written only through the `SceneGraph` trait,
/// and world ↔ frame mapping goes through a `FrameProjector`.

use glam::{Mat4, Vec3};
use crate::camera::{CameraLens, FramePoint, FrameProjector, RenderFrame, ViewFrameProjector};
use crate::error::{Error, Result};
use crate::math::Transform;
use crate::scene::{ObjectKey, SceneGraph};
use super::config::{FitConfig, FitOptions};
use super::extremes::Extremes;

const SOURCE: &str = "valign::fit";

/// World moves shorter than this are not applied
const MIN_TRANSLATION: f32 = 1e-6;

/// Stage of a `fit_to_frame` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStage {
    /// Vertex depths checked
    CheckDepth,
    /// Object moved in front of the camera
    Recenter,
    /// Object scaled down uniformly
    Scale,
    /// Object moved towards the frame centre
    Translate,
    /// Terminal stage
    Done,
}

/// What a successful `fit_to_frame` call did
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    /// Fitted object
    pub object: ObjectKey,
    /// Stages executed, in order
    pub stages: Vec<FitStage>,
    /// Recenter attempts made
    pub recenter_attempts: u32,
    /// Overscale measured before scaling
    pub overscale: f32,
    /// Uniform scale factor applied (1.0 when unchanged)
    pub scale_factor: f32,
    /// World translation applied (zero when unchanged)
    pub translation: Vec3,
    /// Extremes after all changes
    pub extremes: Extremes,
    /// Whether the final box keeps the requested margin on every side
    pub within_margin: bool,
}

impl FitReport {
    /// Whether the call modified the object
    pub fn changed(&self) -> bool {
        self.recenter_attempts > 0 || self.scale_factor != 1.0 || self.translation != Vec3::ZERO
    }
}

/// Camera data resolved from the scene for one call
struct CameraView {
    world: Mat4,
    lens: CameraLens,
    frame: RenderFrame,
}

/// Fits objects into a camera's rendered frame.
///
/// # Example
///
/// ```no_run
/// use glam::Vec3;
/// use viewport_align::align::{
///     camera::{CameraLens, RenderFrame},
///     fit::{FitOptions, FrustumFitter},
///     scene::{Scene, SceneObject},
/// };
///
/// let mut scene = Scene::new(RenderFrame::default());
/// let camera = scene.add_object(SceneObject::camera("Camera", CameraLens::default()));
/// let cube = scene.add_object(SceneObject::mesh("Cube", vec![Vec3::splat(-1.0), Vec3::splat(1.0)]));
///
/// let fitter = FrustumFitter::default();
/// let report = fitter.fit_to_frame(&mut scene, cube, camera, &FitOptions::default())?;
/// println!("scaled by {}", report.scale_factor);
/// # Ok::<(), viewport_align::align::Error>(())
/// ```
pub struct FrustumFitter {
    config: FitConfig,
    projector: Box<dyn FrameProjector>,
}

impl FrustumFitter {
    /// Fitter using the standard view-frame projection
    pub fn new(config: FitConfig) -> Self {
        Self::with_projector(config, ViewFrameProjector::new())
    }

    /// Fitter using a custom projection service
    pub fn with_projector<P: FrameProjector + 'static>(config: FitConfig, projector: P) -> Self {
        Self {
            config,
            projector: Box::new(projector),
        }
    }

    /// Log an error before returning it
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::BehindCamera { attempts } => {
                crate::align_error!(SOURCE, "Object still behind camera after {} recenter attempt(s)", attempts);
            }
            _ => {
                crate::align_error!(SOURCE, "Fit failed: {}", error);
            }
        }
        error
    }

    fn camera_view(&self, scene: &dyn SceneGraph, camera: ObjectKey) -> Option<CameraView> {
        let lens = *scene.camera_lens(camera)?;
        let world = scene.world_matrix(camera)?;
        Some(CameraView { world, lens, frame: scene.render_frame() })
    }

    // ===== PROJECTION =====

    /// Project a world point into the camera's frame.
    ///
    /// Returns `None` if `camera` is missing or has no lens.
    pub fn project(&self, scene: &dyn SceneGraph, point: Vec3, camera: ObjectKey) -> Option<FramePoint> {
        let Some(view) = self.camera_view(scene, camera) else {
            crate::align_debug!(SOURCE, "project: camera missing or not a camera");
            return None;
        };
        Some(self.projector.project(point, &view.world, &view.lens, &view.frame))
    }

    /// True iff the point projects to u∈[0,1], v∈[0,1] with depth≥0.
    ///
    /// A missing camera sees nothing.
    pub fn is_in_frame(&self, scene: &dyn SceneGraph, point: Vec3, camera: ObjectKey) -> bool {
        self.project(scene, point, camera).is_some_and(|p| p.is_in_frame())
    }

    /// Frame-space bounds of every vertex of `object`, in a single pass.
    ///
    /// Returns `None` if the object has no vertices or the camera is missing.
    pub fn compute_extremes(
        &self,
        scene: &dyn SceneGraph,
        object: ObjectKey,
        camera: ObjectKey,
    ) -> Option<Extremes> {
        let view = self.camera_view(scene, camera)?;
        let world = scene.world_matrix(object)?;
        let vertices = scene.local_vertices(object)?;

        let extremes = Extremes::from_points(vertices.iter().map(|local| {
            let point = world.transform_point3(*local);
            (self.projector.project(point, &view.world, &view.lens, &view.frame), point)
        }));

        if let Some(e) = &extremes {
            crate::align_trace!(
                SOURCE,
                "Extremes u [{:.4}, {:.4}] v [{:.4}, {:.4}] x {:?} y {:?} over {} vertices",
                e.u.min, e.u.max, e.v.min, e.v.max, e.x(), e.y(), e.vertex_count
            );
        }
        extremes
    }

    // ===== PLACEMENT =====

    /// Move `object` onto the camera and `distance` units along the camera's
    /// view direction (local -Z).
    ///
    /// The object keeps its world scale; the camera's scale is ignored.
    /// With `attach` the object is parented to the camera and its local
    /// transform becomes the offset. Without it, the parent is unchanged.
    ///
    /// Returns `None` (and changes nothing) if either object is missing,
    /// `camera` has no lens, `object` is the camera itself, or the camera is
    /// parented under `object` (moving the object would carry the camera along).
    pub fn recenter_in_camera(
        &self,
        scene: &mut dyn SceneGraph,
        object: ObjectKey,
        camera: ObjectKey,
        distance: f32,
        attach: bool,
    ) -> Option<ObjectKey> {
        if object == camera || scene.camera_lens(camera).is_none() {
            crate::align_debug!(SOURCE, "recenter: no usable camera");
            return None;
        }
        if scene.is_ancestor(object, camera) {
            crate::align_warn!(SOURCE, "recenter: camera is a child of the object, object cannot be moved");
            return None;
        }
        let camera_world = scene.world_matrix(camera)?;
        let object_world = scene.world_matrix(object)?;

        let camera_placement = Transform::from_matrix(&camera_world).normalized();
        let offset = Transform {
            translation: Vec3::new(0.0, 0.0, -distance),
            rotation: glam::Quat::IDENTITY,
            scale: Transform::from_matrix(&object_world).scale,
        };
        let target = camera_placement.to_matrix() * offset.to_matrix();
        if !target.is_finite() {
            crate::align_warn!(SOURCE, "recenter: non-finite placement, object left in place");
            return None;
        }

        if attach && !scene.set_parent(object, Some(camera)) {
            crate::align_warn!(SOURCE, "recenter: cannot parent object to camera");
            return None;
        }
        if !scene.set_world_matrix(object, target) {
            return None;
        }

        crate::align_debug!(
            SOURCE,
            "Recentered '{}' {:.3} in front of '{}'{}",
            scene.name(object).unwrap_or("?"),
            distance,
            scene.name(camera).unwrap_or("?"),
            if attach { " (attached)" } else { "" }
        );
        Some(object)
    }

    // ===== FIT =====

    /// Scale (and optionally move) `object` so its vertices project inside
    /// the camera frame.
    ///
    /// Stages:
    /// 1. While any vertex is behind the camera, recenter the object and
    ///    retry, at most `max_recenter_attempts` times.
    /// 2. If the projected box overflows, scale uniformly by
    ///    `1 / (1 + 2 * overscale)` where overscale is the worse axis overflow.
    /// 3. With `move_into_view`, if the box still lies partly outside
    ///    `[0, 1]`, translate so the box is centred. Centring leaves the widest
    ///    possible border, so `margin` holds whenever the box is narrower than
    ///    `1 - 2 * margin`; `FitReport::within_margin` records whether it did.
    ///
    /// A call on an object already inside the frame changes nothing,
    /// whatever the margin.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` for a margin outside `[0, 0.5)` or a negative distance
    /// - `MissingInput` if the object or camera is missing
    /// - `DegenerateGeometry` for an object without vertices or a zero-area frame
    /// - `BehindCamera` when the recenter cap is exceeded
    ///
    /// Only `BehindCamera` leaves the object modified (recentered).
    pub fn fit_to_frame(
        &self,
        scene: &mut dyn SceneGraph,
        object: ObjectKey,
        camera: ObjectKey,
        options: &FitOptions,
    ) -> Result<FitReport> {
        Self::validate(scene, object, camera, options).map_err(Self::log_and_return_error)?;

        let mut stages = vec![FitStage::CheckDepth];
        let mut extremes = self.require_extremes(scene, object, camera)?;

        // CHECK_DEPTH / RECENTER
        let mut attempts = 0;
        let mut distance = options.distance.max(self.config.min_recenter_distance);
        while extremes.has_vertices_behind() {
            if attempts >= self.config.max_recenter_attempts {
                return Err(Self::log_and_return_error(Error::BehindCamera { attempts }));
            }
            attempts += 1;
            crate::align_debug!(
                SOURCE,
                "Vertex behind camera (depth {:.3}), recenter attempt {} at distance {:.3}",
                extremes.min_depth, attempts, distance
            );
            self.recenter_in_camera(scene, object, camera, distance, false)
                .ok_or_else(|| Self::log_and_return_error(Error::MissingInput("object cannot be moved".to_string())))?;
            stages.push(FitStage::Recenter);
            distance *= self.config.recenter_growth;
            extremes = self.require_extremes(scene, object, camera)?;
        }

        // SCALE
        let overscale = extremes.overscale();
        crate::align_debug!(
            SOURCE,
            "Projected box u [{:.4}, {:.4}] v [{:.4}, {:.4}], overscale {:.4}",
            extremes.u.min, extremes.u.max, extremes.v.min, extremes.v.max, overscale
        );

        let mut scale_factor = 1.0;
        if overscale > 0.0 {
            scale_factor = 1.0 / (1.0 + overscale * 2.0);
            let transform = scene
                .transform(object)
                .ok_or_else(|| Self::log_and_return_error(Error::MissingInput("object transform".to_string())))?;
            scene.set_transform(object, transform.scaled_by(scale_factor));
            stages.push(FitStage::Scale);
            crate::align_info!(SOURCE, "Scaled '{}' by {:.4}", scene.name(object).unwrap_or("?"), scale_factor);
            extremes = self.require_extremes(scene, object, camera)?;
        }

        // TRANSLATE
        let mut translation = Vec3::ZERO;
        if options.move_into_view && !extremes.is_inside(0.0) {
            let delta = self
                .centering_delta(scene, camera, &extremes)
                .filter(|delta| delta.length_squared() > MIN_TRANSLATION * MIN_TRANSLATION);
            if let Some(delta) = delta {
                Self::translate_world(scene, object, delta);
                translation = delta;
                stages.push(FitStage::Translate);
                crate::align_info!(
                    SOURCE,
                    "Moved '{}' by ({:.4}, {:.4}, {:.4})",
                    scene.name(object).unwrap_or("?"),
                    delta.x, delta.y, delta.z
                );
                extremes = self.require_extremes(scene, object, camera)?;
                if !extremes.is_inside(options.margin) {
                    crate::align_warn!(
                        SOURCE,
                        "'{}' is centred but wider than the {:.3} margin allows",
                        scene.name(object).unwrap_or("?"),
                        options.margin
                    );
                }
            }
        }

        stages.push(FitStage::Done);
        Ok(FitReport {
            object,
            within_margin: extremes.is_inside(options.margin),
            stages,
            recenter_attempts: attempts,
            overscale,
            scale_factor,
            translation,
            extremes,
        })
    }

    fn validate(
        scene: &dyn SceneGraph,
        object: ObjectKey,
        camera: ObjectKey,
        options: &FitOptions,
    ) -> Result<()> {
        if !(0.0..0.5).contains(&options.margin) {
            return Err(Error::InvalidParameter(format!(
                "margin must be in [0, 0.5), got {}",
                options.margin
            )));
        }
        if !options.distance.is_finite() || options.distance < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "distance must be a non-negative number, got {}",
                options.distance
            )));
        }
        if !scene.contains(object) {
            return Err(Error::MissingInput("object not found".to_string()));
        }
        if object == camera || scene.camera_lens(camera).is_none() {
            return Err(Error::MissingInput("camera not found".to_string()));
        }
        if !scene.render_frame().is_valid() {
            return Err(Error::DegenerateGeometry("render frame has zero area".to_string()));
        }
        match scene.local_vertices(object) {
            None => Err(Error::MissingInput(format!(
                "'{}' has no vertex data",
                scene.name(object).unwrap_or("?")
            ))),
            Some([]) => Err(Error::DegenerateGeometry(format!(
                "'{}' has zero vertices",
                scene.name(object).unwrap_or("?")
            ))),
            Some(_) => Ok(()),
        }
    }

    fn require_extremes(
        &self,
        scene: &dyn SceneGraph,
        object: ObjectKey,
        camera: ObjectKey,
    ) -> Result<Extremes> {
        let extremes = self
            .compute_extremes(scene, object, camera)
            .ok_or_else(|| Self::log_and_return_error(Error::MissingInput("vertex data".to_string())))?;
        if !extremes.is_finite() {
            return Err(Self::log_and_return_error(Error::DegenerateGeometry(
                "projection is not finite".to_string(),
            )));
        }
        Ok(extremes)
    }

    /// World displacement that moves the box centre to the frame centre,
    /// measured at the object's mean depth.
    fn centering_delta(&self, scene: &dyn SceneGraph, camera: ObjectKey, extremes: &Extremes) -> Option<Vec3> {
        let view = self.camera_view(scene, camera)?;
        let center = extremes.center();
        let depth = extremes.mean_depth;

        let from = self.projector.unproject(FramePoint::new(center.x, center.y, depth), &view.world, &view.lens, &view.frame);
        let to = self.projector.unproject(FramePoint::new(0.5, 0.5, depth), &view.world, &view.lens, &view.frame);
        let delta = to - from;

        if delta.is_finite() {
            Some(delta)
        } else {
            crate::align_warn!(SOURCE, "Cannot compute a finite move into view, translation skipped");
            None
        }
    }

    /// Shift the object by a world-space vector, expressed in its parent's space.
    fn translate_world(scene: &mut dyn SceneGraph, object: ObjectKey, delta: Vec3) {
        let to_parent = scene.parent_world_matrix(object).inverse();
        if let Some(mut transform) = scene.transform(object) {
            transform.translation += to_parent.transform_vector3(delta);
            scene.set_transform(object, transform);
        }
    }
}

impl Default for FrustumFitter {
    fn default() -> Self {
        Self::new(FitConfig::default())
    }
}

#[cfg(test)]
#[path = "fitter_tests.rs"]
mod tests;
