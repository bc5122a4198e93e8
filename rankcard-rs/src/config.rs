//! Card configuration: defaults, setters, and the validation gate.

use crate::error::{CardError, RequiredField};
use rankcard_canvas::{parse_color, Color, FillStyle};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Maximum number of visible username characters before truncation.
pub const USERNAME_MAX_CHARS: usize = 11;

const ELLIPSIS: char = '\u{2026}';

/// Presence status shown by the indicator square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Online,
    Idle,
    Dnd,
    Offline,
    Invisible,
}

impl Status {
    /// Indicator fill color. Offline and invisible share gray.
    pub fn indicator_color(self) -> &'static str {
        match self {
            Status::Online => "#43b581",
            Status::Idle => "#faa61a",
            Status::Dnd => "#f04747",
            Status::Offline | Status::Invisible => "#747f8e",
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "online" => Status::Online,
            "idle" => Status::Idle,
            "dnd" => Status::Dnd,
            "offline" => Status::Offline,
            "invisible" => Status::Invisible,
            _ => return Err(format!("Unsupported status: {s}")),
        })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Online => "online",
            Status::Idle => "idle",
            Status::Dnd => "dnd",
            Status::Offline => "offline",
            Status::Invisible => "invisible",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    pub track_color: String,
    pub bar_color: String,
    /// Colors of the bar gradient drawn when maxed.
    pub maxed_gradient_stops: Option<Vec<String>>,
}

/// A label/number text pair such as "Rank 5".
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledNumber {
    pub value: Option<u64>,
    pub number_color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColoredValue<T> {
    pub value: Option<T>,
    pub color: String,
}

impl<T> ColoredValue<T> {
    fn unset(color: &str) -> Self {
        Self {
            value: None,
            color: color.to_string(),
        }
    }

    fn set(&mut self, value: T, color: Option<&str>) {
        if let Some(color) = color {
            self.color = color.to_string();
        }
        self.value = Some(value);
    }
}

/// All render parameters of a card.
///
/// Created with defaults, adjusted through chained setters, then frozen with
/// [`CardConfig::validate`] before drawing.
///
/// ```rust,ignore
/// let mut config = CardConfig::new();
/// config
///     .set_avatar("https://cdn.example.com/avatar.png")?
///     .set_rank(5, None, None)
///     .set_level(10, None, None)
///     .set_current_xp(250, None)
///     .set_required_xp(1000, None)
///     .set_username("Someone", None)
///     .set_discriminator("0001", None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CardConfig {
    width: u32,
    height: u32,
    background_color: String,
    overlay_color: String,
    avatar_url: Option<Url>,
    badge_url: Option<Url>,
    status: Status,
    maxed: bool,
    progress_bar: ProgressBar,
    rank: LabeledNumber,
    level: LabeledNumber,
    current_xp: ColoredValue<u64>,
    required_xp: ColoredValue<u64>,
    username: ColoredValue<String>,
    discriminator: ColoredValue<String>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            width: 930,
            height: 280,
            background_color: "#23272A".to_string(),
            overlay_color: "#333640".to_string(),
            avatar_url: None,
            badge_url: None,
            status: Status::Online,
            maxed: false,
            progress_bar: ProgressBar {
                track_color: "#484b4e".to_string(),
                bar_color: "#ffffff".to_string(),
                maxed_gradient_stops: None,
            },
            rank: LabeledNumber {
                value: None,
                number_color: "#f3f3f3".to_string(),
                text_color: "#ffffff".to_string(),
            },
            level: LabeledNumber {
                value: None,
                number_color: "#f3f3f3".to_string(),
                text_color: "#ffffff".to_string(),
            },
            current_xp: ColoredValue::unset("#ffffff"),
            required_xp: ColoredValue::unset("#ffffff"),
            username: ColoredValue::unset("#ffffff"),
            discriminator: ColoredValue::unset("#ffffff66"),
        }
    }
}

fn parse_url(field: &'static str, url: &str) -> Result<Url, CardError> {
    Url::parse(url).map_err(|source| {
        log::warn!("Rejected {field} URL {url:?}: {source}");
        CardError::InvalidUrl {
            field,
            url: url.to_string(),
            source,
        }
    })
}

/// Cut names longer than [`USERNAME_MAX_CHARS`] and append an ellipsis.
pub fn truncate_username(name: &str) -> String {
    if name.chars().count() <= USERNAME_MAX_CHARS {
        return name.to_string();
    }
    let head: String = name.chars().take(USERNAME_MAX_CHARS).collect();
    let mut truncated = head.trim_end().to_string();
    truncated.push(ELLIPSIS);
    truncated
}

impl CardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn set_background_color(&mut self, color: &str) -> &mut Self {
        self.background_color = color.to_string();
        self
    }

    pub fn set_overlay_color(&mut self, color: &str) -> &mut Self {
        self.overlay_color = color.to_string();
        self
    }

    /// Set the avatar URL. An unparsable URL is reported and leaves the
    /// previous avatar in place.
    pub fn set_avatar(&mut self, url: &str) -> Result<&mut Self, CardError> {
        self.avatar_url = Some(parse_url("avatar", url)?);
        Ok(self)
    }

    pub fn set_status(&mut self, status: Status) -> &mut Self {
        self.status = status;
        self
    }

    pub fn set_progressbar_color(&mut self, color: &str) -> &mut Self {
        self.progress_bar.bar_color = color.to_string();
        self
    }

    pub fn set_progressbar_track_color(&mut self, color: &str) -> &mut Self {
        self.progress_bar.track_color = color.to_string();
        self
    }

    /// Set the rank number. Colors are only replaced when given.
    pub fn set_rank(
        &mut self,
        rank: u64,
        number_color: Option<&str>,
        text_color: Option<&str>,
    ) -> &mut Self {
        set_labeled(&mut self.rank, rank, number_color, text_color);
        self
    }

    /// Set the level number. Colors are only replaced when given.
    pub fn set_level(
        &mut self,
        level: u64,
        number_color: Option<&str>,
        text_color: Option<&str>,
    ) -> &mut Self {
        set_labeled(&mut self.level, level, number_color, text_color);
        self
    }

    pub fn set_current_xp(&mut self, xp: u64, color: Option<&str>) -> &mut Self {
        self.current_xp.set(xp, color);
        self
    }

    pub fn set_required_xp(&mut self, xp: u64, color: Option<&str>) -> &mut Self {
        self.required_xp.set(xp, color);
        self
    }

    /// Store the username, truncated with an ellipsis past 11 characters.
    pub fn set_username(&mut self, name: &str, color: Option<&str>) -> &mut Self {
        self.username.set(truncate_username(name), color);
        self
    }

    /// Store the discriminator with a leading `#`.
    pub fn set_discriminator(&mut self, discriminator: &str, color: Option<&str>) -> &mut Self {
        self.discriminator.set(format!("#{discriminator}"), color);
        self
    }

    /// Switch the completed-bar mode on or off.
    ///
    /// `gradient_stops` replaces the maxed bar gradient when given. `badge_url`
    /// is checked before anything is changed, so a rejected badge leaves the
    /// whole config untouched.
    pub fn set_maxed(
        &mut self,
        maxed: bool,
        gradient_stops: Option<Vec<String>>,
        badge_url: Option<&str>,
    ) -> Result<&mut Self, CardError> {
        let badge_url = badge_url.map(|url| parse_url("badge", url)).transpose()?;
        if let Some(stops) = gradient_stops {
            self.progress_bar.maxed_gradient_stops = Some(stops);
        }
        if let Some(url) = badge_url {
            self.badge_url = Some(url);
        }
        self.maxed = maxed;
        Ok(self)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    pub fn overlay_color(&self) -> &str {
        &self.overlay_color
    }

    pub fn avatar_url(&self) -> Option<&Url> {
        self.avatar_url.as_ref()
    }

    pub fn badge_url(&self) -> Option<&Url> {
        self.badge_url.as_ref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn maxed(&self) -> bool {
        self.maxed
    }

    pub fn progress_bar(&self) -> &ProgressBar {
        &self.progress_bar
    }

    pub fn rank(&self) -> &LabeledNumber {
        &self.rank
    }

    pub fn level(&self) -> &LabeledNumber {
        &self.level
    }

    pub fn current_xp(&self) -> &ColoredValue<u64> {
        &self.current_xp
    }

    pub fn required_xp(&self) -> &ColoredValue<u64> {
        &self.required_xp
    }

    pub fn username(&self) -> &ColoredValue<String> {
        &self.username
    }

    pub fn discriminator(&self) -> &ColoredValue<String> {
        &self.discriminator
    }

    /// Check required fields in priority order, then parse every color, and
    /// freeze the config for drawing.
    pub fn validate(&self) -> Result<ValidatedCard<'_>, CardError> {
        use RequiredField::*;

        let avatar_url = self.avatar_url.as_ref().ok_or(CardError::MissingField(Avatar))?;
        let rank = self.rank.value.ok_or(CardError::MissingField(Rank))?;
        let level = self.level.value.ok_or(CardError::MissingField(Level))?;
        let current_xp = self
            .current_xp
            .value
            .ok_or(CardError::MissingField(CurrentXp))?;
        let required_xp = self
            .required_xp
            .value
            .ok_or(CardError::MissingField(RequiredXp))?;
        let username = self
            .username
            .value
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(CardError::MissingField(Username))?;
        let discriminator = self
            .discriminator
            .value
            .as_deref()
            .ok_or(CardError::MissingField(Discriminator))?;

        Ok(ValidatedCard {
            config: self,
            avatar_url,
            rank,
            level,
            current_xp,
            required_xp,
            username,
            discriminator,
            palette: Palette::parse(self)?,
        })
    }
}

fn set_labeled(
    field: &mut LabeledNumber,
    value: u64,
    number_color: Option<&str>,
    text_color: Option<&str>,
) {
    if let Some(color) = number_color {
        field.number_color = color.to_string();
    }
    if let Some(color) = text_color {
        field.text_color = color.to_string();
    }
    field.value = Some(value);
}

/// A config that passed validation, with every required value present.
#[derive(Debug, Clone)]
pub struct ValidatedCard<'a> {
    pub config: &'a CardConfig,
    pub avatar_url: &'a Url,
    pub rank: u64,
    pub level: u64,
    pub current_xp: u64,
    pub required_xp: u64,
    pub username: &'a str,
    pub discriminator: &'a str,
    pub palette: Palette,
}

/// Every color of a card, parsed.
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: FillStyle,
    pub overlay: FillStyle,
    pub status: FillStyle,
    pub track: FillStyle,
    pub bar: FillStyle,
    /// Maxed bar gradient colors in order; empty when none were set.
    pub gradient: Vec<Color>,
    pub rank_label: FillStyle,
    pub rank_number: FillStyle,
    pub level_label: FillStyle,
    pub level_number: FillStyle,
    pub current_xp: FillStyle,
    pub required_xp: FillStyle,
    pub username: FillStyle,
    pub discriminator: FillStyle,
}

impl Palette {
    fn parse(config: &CardConfig) -> Result<Self, CardError> {
        let gradient = config
            .progress_bar
            .maxed_gradient_stops
            .iter()
            .flatten()
            .map(|color| parse_color(color))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            background: FillStyle::css(&config.background_color)?,
            overlay: FillStyle::css(&config.overlay_color)?,
            status: FillStyle::css(config.status.indicator_color())?,
            track: FillStyle::css(&config.progress_bar.track_color)?,
            bar: FillStyle::css(&config.progress_bar.bar_color)?,
            gradient,
            rank_label: FillStyle::css(&config.rank.text_color)?,
            rank_number: FillStyle::css(&config.rank.number_color)?,
            level_label: FillStyle::css(&config.level.text_color)?,
            level_number: FillStyle::css(&config.level.number_color)?,
            current_xp: FillStyle::css(&config.current_xp.color)?,
            required_xp: FillStyle::css(&config.required_xp.color)?,
            username: FillStyle::css(&config.username.color)?,
            discriminator: FillStyle::css(&config.discriminator.color)?,
        })
    }
}

impl<'a> ValidatedCard<'a> {
    /// Badge to draw over the XP region, only when maxed.
    pub fn badge_to_draw(&self) -> Option<&'a Url> {
        if self.config.maxed {
            self.config.badge_url.as_ref()
        } else {
            None
        }
    }
}
