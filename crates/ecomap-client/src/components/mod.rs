//! UI components for the ecomap client.

mod add_point_panel;
mod category_filter;
mod details_modal;
mod map_view;
mod marker;
mod modal;
mod report_modal;
mod toast;

pub use add_point_panel::AddPointPanel;
pub use category_filter::CategoryFilterPanel;
pub use details_modal::DetailsModal;
pub use map_view::MapView;
pub use marker::PointMarker;
pub use modal::Modal;
pub use report_modal::ReportModal;
pub use toast::ToastArea;
