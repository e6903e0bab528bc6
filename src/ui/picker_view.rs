/// Picker view: call-to-action while nothing is shown, detail card otherwise
use iced::widget::image::Handle;
use iced::widget::{button, column, container, horizontal_space, image, row, text, Column};
use iced::alignment::Horizontal;
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::data::{Movie, Poster, Ratings};
use crate::state::picker::{Picker, Screen};
use crate::Message;

const POSTER_WIDTH: f32 = 280.0;
const POSTER_HEIGHT: f32 = 420.0;

/// Call-to-action keeps this width whether idle or loading
const SURPRISE_BUTTON_WIDTH: f32 = 360.0;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Spinner glyph for the given animation tick
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Placeholder text for posters we do not load
pub fn poster_caption(poster: &Poster) -> String {
    match poster.requested_size() {
        Some((w, h)) => format!("Poster {}×{}", w, h),
        None => "Poster".to_string(),
    }
}

pub fn view(picker: &Picker, spinner_tick: usize) -> Element<'_, Message> {
    match picker.screen() {
        Screen::Idle => surprise_button(None),
        Screen::Selecting => surprise_button(Some(spinner_tick)),
        Screen::Detail(movie) => detail_card(movie),
    }
}

/// Call-to-action label: spinner glyph while loading
pub fn surprise_label(loading: Option<usize>) -> &'static str {
    match loading {
        Some(tick) => spinner_frame(tick),
        None => "Surprise Me!",
    }
}

/// Big call-to-action. Disabled while a pick is in flight.
fn surprise_button<'a>(loading: Option<usize>) -> Element<'a, Message> {
    let label = text(surprise_label(loading))
        .size(32)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let mut control = button(label)
        .padding([24, 48])
        .width(Length::Fixed(SURPRISE_BUTTON_WIDTH))
        .style(button::primary);

    // No on_press renders the button disabled
    if loading.is_none() {
        control = control.on_press(Message::Pick);
    }

    container(control)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn detail_card(movie: &Movie) -> Element<'_, Message> {
    let poster_column = column![poster(movie), genre_badges(&movie.genres)].spacing(12);

    let heading = row![
        text(&movie.title).size(36),
        horizontal_space(),
        text(movie.year.to_string()).size(24),
    ]
    .align_y(Alignment::Center);

    let actions = row![
        button(text("Another One").size(18))
            .on_press(Message::Pick)
            .padding(12)
            .width(Length::Fill)
            .style(button::primary),
        button(text("Watch Now").size(18))
            .on_press(Message::WatchNow)
            .padding(12)
            .width(Length::Fill)
            .style(button::secondary),
    ]
    .spacing(16);

    let info_column = column![
        heading,
        text(&movie.description).size(18),
        ratings_row(&movie.ratings),
        actions,
    ]
    .spacing(24)
    .width(Length::Fill);

    container(row![poster_column, info_column].spacing(32))
        .padding(24)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn poster(movie: &Movie) -> Element<'_, Message> {
    match &movie.poster {
        Poster::Local(path) => image(Handle::from_path(path))
            .width(Length::Fixed(POSTER_WIDTH))
            .height(Length::Fixed(POSTER_HEIGHT))
            .into(),
        Poster::Remote { .. } => container(
            column![
                text(&movie.title).size(20),
                text(poster_caption(&movie.poster)).size(14),
            ]
            .spacing(8)
            .align_x(Alignment::Center),
        )
        .width(Length::Fixed(POSTER_WIDTH))
        .height(Length::Fixed(POSTER_HEIGHT))
        .center_x(Length::Fixed(POSTER_WIDTH))
        .center_y(Length::Fixed(POSTER_HEIGHT))
        .style(container::rounded_box)
        .into(),
    }
}

fn genre_badges(genres: &[String]) -> Element<'_, Message> {
    let badges: Vec<Element<'_, Message>> = genres
        .iter()
        .map(|genre| {
            container(text(genre).size(12))
                .padding([2, 8])
                .style(container::rounded_box)
                .into()
        })
        .collect();

    Wrap::with_elements(badges)
        .spacing(6.0)
        .line_spacing(6.0)
        .into()
}

fn ratings_row(ratings: &Ratings) -> Element<'_, Message> {
    row![
        rating_box("IMDb", ratings.imdb_label()),
        rating_box("Kinopoisk", ratings.kinopoisk_label()),
        rating_box("RT", ratings.rotten_tomatoes_label()),
    ]
    .spacing(16)
    .into()
}

fn rating_box<'a>(source: &'a str, value: String) -> Element<'a, Message> {
    let content: Column<Message> = column![text(source).size(14), text(value).size(28)]
        .spacing(6)
        .align_x(Alignment::Center);

    container(content)
        .padding(16)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(container::rounded_box)
        .into()
}
