use crate::coords::Rect;
use crate::paint::Color;

/// One call made against a [`Surface`](super::Surface), as logged by
/// [`RecordingSurface`](super::RecordingSurface).
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCmd {
    ClearRect(Rect),
    SetLineWidth(f32),
    SetStrokeColor(Color),
    StrokeRect(Rect),
}
