/// UI widgets
///
/// - `picker_view.rs` - call-to-action and movie detail card
/// - `chrome.rs` - optional header and footer

pub mod chrome;
pub mod picker_view;
