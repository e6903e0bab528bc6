/// Optional header and footer around the picker
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::Message;

pub const TITLE: &str = "Cinema Surprise";
pub const TAGLINE: &str = "Your movie decision, made in 10 seconds";

pub fn footer_text(year: i32) -> String {
    format!("© {} {} • Made with ❤️ for movie lovers", year, TITLE)
}

pub fn header<'a>() -> Element<'a, Message> {
    container(
        column![text(TITLE).size(64), text(TAGLINE).size(24)]
            .spacing(12)
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

pub fn footer<'a>(year: i32) -> Element<'a, Message> {
    container(text(footer_text(year)).size(14))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_text() {
        assert_eq!(
            footer_text(2025),
            "© 2025 Cinema Surprise • Made with ❤️ for movie lovers"
        );
    }
}
