//! Window state, messages and layout.

use iced::widget::{button, column, text, text_input};
use iced::{Alignment, Element, Font, Length, Size, Task, font};
use weather_core::{
    FetchError, OpenWeatherClient, Presentation, TemperatureStyle, WeatherReading,
};

const TITLE: &str = "Weather App";

const PROMPT_SIZE: u16 = 40;
const INPUT_SIZE: u16 = 40;
const BUTTON_SIZE: u16 = 30;
const TEMPERATURE_SIZE: u16 = 75;
const MESSAGE_SIZE: u16 = 30;
const EMOJI_SIZE: u16 = 100;
const DESCRIPTION_SIZE: u16 = 50;

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

/// Run the GUI application.
pub fn run(client: OpenWeatherClient) -> iced::Result {
    iced::application(TITLE, WeatherApp::update, WeatherApp::view)
        .window_size(Size::new(560.0, 680.0))
        .run_with(move || (WeatherApp::new(client), Task::none()))
}

/// Main application state.
#[derive(Debug)]
pub struct WeatherApp {
    client: OpenWeatherClient,
    city: String,
    /// Set while a request is in flight; activation is ignored meanwhile.
    loading: bool,
    display: Presentation,
}

/// Application messages.
#[derive(Debug, Clone)]
pub enum Message {
    CityChanged(String),
    /// "Get Weather" button or Enter in the city field.
    GetWeather,
    WeatherFetched(Result<WeatherReading, FetchError>),
}

impl WeatherApp {
    pub fn new(client: OpenWeatherClient) -> Self {
        Self {
            client,
            city: String::new(),
            loading: false,
            display: Presentation::default(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CityChanged(city) => {
                self.city = city;
                Task::none()
            }
            Message::GetWeather => {
                if self.loading {
                    return Task::none();
                }
                self.loading = true;

                let client = self.client.clone();
                let city = self.city.clone();
                Task::perform(
                    async move { client.current(&city).await },
                    Message::WeatherFetched,
                )
            }
            Message::WeatherFetched(outcome) => {
                self.loading = false;
                self.display = Presentation::from_outcome(&outcome);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let prompt = text("Enter city name: ")
            .size(PROMPT_SIZE)
            .font(Font {
                style: font::Style::Italic,
                ..Font::DEFAULT
            })
            .width(Length::Fill)
            .align_x(Alignment::Center);

        let input = text_input("", &self.city)
            .on_input(Message::CityChanged)
            .on_submit(Message::GetWeather)
            .size(INPUT_SIZE)
            .align_x(Alignment::Center);

        let get_weather = button(text("Get Weather").size(BUTTON_SIZE).font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        }))
        .on_press_maybe((!self.loading).then_some(Message::GetWeather));

        let temperature = text(&self.display.temperature)
            .size(temperature_size(self.display.temperature_style))
            .width(Length::Fill)
            .align_x(Alignment::Center);

        let emoji = text(&self.display.emoji)
            .size(EMOJI_SIZE)
            .font(EMOJI_FONT)
            .width(Length::Fill)
            .align_x(Alignment::Center);

        let description = text(&self.display.description)
            .size(DESCRIPTION_SIZE)
            .width(Length::Fill)
            .align_x(Alignment::Center);

        column![prompt, input, get_weather, temperature, emoji, description]
            .spacing(16)
            .padding(24)
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .into()
    }
}

fn temperature_size(style: TemperatureStyle) -> u16 {
    match style {
        TemperatureStyle::Reading => TEMPERATURE_SIZE,
        TemperatureStyle::Message => MESSAGE_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> WeatherApp {
        WeatherApp::new(OpenWeatherClient::new("KEY".into()))
    }

    fn clear_sky() -> WeatherReading {
        WeatherReading {
            temperature_kelvin: 300.0,
            condition_code: 800,
            description: "clear sky".into(),
        }
    }

    #[test]
    fn starts_empty() {
        let app = app();
        assert!(app.city.is_empty());
        assert!(!app.loading);
        assert_eq!(app.display, Presentation::default());
    }

    #[test]
    fn typing_updates_city() {
        let mut app = app();
        let _ = app.update(Message::CityChanged("Paris".into()));
        assert_eq!(app.city, "Paris");
    }

    #[test]
    fn activation_is_ignored_while_loading() {
        let mut app = app();
        let _ = app.update(Message::CityChanged("Paris".into()));

        let _ = app.update(Message::GetWeather);
        assert!(app.loading);

        let _ = app.update(Message::GetWeather);
        assert!(app.loading);
    }

    #[test]
    fn success_fills_all_three_fields() {
        let mut app = app();
        let _ = app.update(Message::GetWeather);
        let _ = app.update(Message::WeatherFetched(Ok(clear_sky())));

        assert!(!app.loading);
        assert_eq!(app.display.temperature, "80°F");
        assert_eq!(app.display.emoji, "☀️");
        assert_eq!(app.display.description, "clear sky");
        assert_eq!(temperature_size(app.display.temperature_style), TEMPERATURE_SIZE);
    }

    #[test]
    fn error_replaces_previous_reading() {
        let mut app = app();
        let _ = app.update(Message::WeatherFetched(Ok(clear_sky())));
        let _ = app.update(Message::WeatherFetched(Err(FetchError::Connection(
            "refused".into(),
        ))));

        assert!(app.display.temperature.starts_with("Connection Error"));
        assert!(app.display.emoji.is_empty());
        assert!(app.display.description.is_empty());
        assert_eq!(temperature_size(app.display.temperature_style), MESSAGE_SIZE);
    }

    #[test]
    fn view_builds_for_reading_and_error() {
        let mut app = app();
        let _ = app.update(Message::CityChanged("Paris".into()));
        let _ = app.view();

        let _ = app.update(Message::WeatherFetched(Err(FetchError::Timeout("slow".into()))));
        let _ = app.view();
    }
}
