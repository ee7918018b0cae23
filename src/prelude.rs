//! Convenient re-exports for common types and traits

pub use crate::FlyoverPlugin;
pub use crate::configuration::AnimationCurve;
pub use crate::configuration::Configuration;
pub use crate::configuration::Preset;
pub use crate::coordinate::Coordinate;
pub use crate::events::FlyoverStarted;
pub use crate::events::FlyoverStepComplete;
pub use crate::events::FlyoverStopped;
pub use crate::events::ResumeFlyover;
pub use crate::events::SetMapType;
pub use crate::events::StartFlyover;
pub use crate::events::StopFlyover;
pub use crate::flyover::Flyover;
pub use crate::landmark::Landmark;
pub use crate::map_view::FlyoverMapView;
pub use crate::map_view::FlyoverMapViews;
pub use crate::parameter::Parameter;
pub use crate::settings::FlyoverSettings;
pub use crate::viewport::MapCamera;
pub use crate::viewport::MapType;
pub use crate::viewport::MapViewport;
