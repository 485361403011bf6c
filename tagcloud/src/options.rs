//! Render options and their defaults.
//!
//! Options can be built in code (struct update syntax or the `with_*`
//! builders) or read from the untyped option map a template engine hands to
//! its helpers. The loose reader follows template truthiness: a missing,
//! `null`, `0`, `false` or empty-string value means "use the default".

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::color::Color;
use crate::error::OptionsError;
use crate::types::SortOrder;

/// Maps a tag name to the text shown inside its anchor.
pub type Transform = Arc<dyn Fn(&str) -> String + Send + Sync>;

pub const DEFAULT_MIN_FONT: f64 = 10.0;
pub const DEFAULT_MAX_FONT: f64 = 20.0;
pub const DEFAULT_ORDERBY: &str = "name";
pub const DEFAULT_UNIT: &str = "px";
pub const DEFAULT_SEPARATOR: &str = " ";

/// How tags are sequenced before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBy {
    /// Uniform shuffle (`"random"` or `"rand"`).
    Random,
    /// Stable sort on the named tag field.
    Field(String),
}

impl OrderBy {
    /// Reads an `orderby` option value.
    ///
    /// ## Examples
    ///
    /// ```
    /// use tagcloud::OrderBy;
    ///
    /// assert_eq!(OrderBy::parse("rand"), OrderBy::Random);
    /// assert_eq!(OrderBy::parse("length"), OrderBy::Field("length".into()));
    /// ```
    pub fn parse(value: &str) -> Self {
        match value {
            "random" | "rand" => Self::Random,
            field => Self::Field(field.to_string()),
        }
    }
}

impl Default for OrderBy {
    fn default() -> Self {
        Self::Field(DEFAULT_ORDERBY.to_string())
    }
}

/// Options for a single tag cloud render.
#[derive(Clone)]
pub struct RenderOptions {
    /// Font size of the least used tags.
    pub min_font: f64,
    /// Font size of the most used tags.
    pub max_font: f64,
    pub orderby: OrderBy,
    pub order: SortOrder,
    /// CSS unit appended to every font size.
    pub unit: String,
    /// Maximum number of tags to render; `None` renders all of them.
    pub amount: Option<usize>,
    /// Joins the rendered anchors.
    pub separator: String,
    /// Maps tag names to display text.
    pub transform: Option<Transform>,
    /// Gradient coloring flag. Validated against the two colors below but
    /// never applied to the output.
    pub color: bool,
    pub start_color: Option<String>,
    pub end_color: Option<String>,
    /// HTML-escape names and hrefs. Off by default, which leaves tag names
    /// free to inject markup into the page.
    pub escape_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            min_font: DEFAULT_MIN_FONT,
            max_font: DEFAULT_MAX_FONT,
            orderby: OrderBy::default(),
            order: SortOrder::Ascending,
            unit: DEFAULT_UNIT.to_string(),
            amount: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            transform: None,
            color: false,
            start_color: None,
            end_color: None,
            escape_html: false,
        }
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("min_font", &self.min_font)
            .field("max_font", &self.max_font)
            .field("orderby", &self.orderby)
            .field("order", &self.order)
            .field("unit", &self.unit)
            .field("amount", &self.amount)
            .field("separator", &self.separator)
            .field("transform", &self.transform.as_ref().map(|_| "<fn>"))
            .field("color", &self.color)
            .field("start_color", &self.start_color)
            .field("end_color", &self.end_color)
            .field("escape_html", &self.escape_html)
            .finish()
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Builder methods
    // -------------------------------------------------------------------------

    /// Sets the font size range.
    pub fn with_font_range(mut self, min_font: f64, max_font: f64) -> Self {
        self.min_font = min_font;
        self.max_font = max_font;
        self
    }

    /// Sets the ordering mode from an `orderby` string.
    pub fn with_orderby(mut self, orderby: &str) -> Self {
        self.orderby = OrderBy::parse(orderby);
        self
    }

    /// Sets the sort direction from an integer multiplier (negative = descending).
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = SortOrder::from_multiplier(order);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Limits the number of rendered tags. `0` means no limit.
    pub fn with_amount(mut self, amount: usize) -> Self {
        self.amount = (amount > 0).then_some(amount);
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the display-name transform.
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    /// Turns on the gradient flag with its two endpoint colors.
    pub fn with_colors(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.color = true;
        self.start_color = Some(start.into());
        self.end_color = Some(end.into());
        self
    }

    pub fn with_escape_html(mut self, escape_html: bool) -> Self {
        self.escape_html = escape_html;
        self
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Returns the color flag after validating both gradient endpoints.
    ///
    /// An unset flag stays off. A set flag with either endpoint missing or
    /// unparseable is turned off and a warning is logged.
    pub fn effective_color(&self) -> bool {
        if !self.color {
            return false;
        }

        match self.gradient() {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Disabling tag cloud color gradient");
                false
            }
        }
    }

    /// Parses the gradient endpoints.
    fn gradient(&self) -> Result<(Color, Color), OptionsError> {
        let parse = |field: &'static str, value: &Option<String>| {
            Color::parse(value.as_deref().unwrap_or_default())
                .map_err(|source| OptionsError::InvalidColor { field, source })
        };

        Ok((
            parse("start_color", &self.start_color)?,
            parse("end_color", &self.end_color)?,
        ))
    }

    /// Returns the display text for a tag name.
    pub fn display_name(&self, name: &str) -> String {
        match &self.transform {
            Some(transform) => transform(name),
            None => name.to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Loose option maps
    // -------------------------------------------------------------------------

    /// Reads options from an untyped template value, never failing.
    ///
    /// Unset and falsy values take their defaults. Values of the wrong type
    /// also take their defaults and log a warning.
    ///
    /// ## Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use tagcloud::{OrderBy, RenderOptions};
    ///
    /// let options = RenderOptions::from_value(&json!({
    ///     "min_font": 12,
    ///     "max_font": 0,
    ///     "orderby": "rand",
    ///     "amount": "lots",
    /// }));
    ///
    /// assert_eq!(options.min_font, 12.0);
    /// assert_eq!(options.max_font, 20.0);
    /// assert_eq!(options.orderby, OrderBy::Random);
    /// assert_eq!(options.amount, None);
    /// ```
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::Object(map) => {
                let Ok(options) = Self::read_map::<Lenient>(map);
                options
            }
            other => {
                tracing::warn!(
                    kind = json_kind(other),
                    "Ignoring tag cloud options that are not an object"
                );
                Self::default()
            }
        }
    }

    /// Reads options from an untyped template value, rejecting wrong types
    /// and invalid gradient colors.
    pub fn try_from_value(value: &Value) -> Result<Self, OptionsError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => {
                let options = Self::read_map::<Strict>(map)?;
                if options.color {
                    options.gradient()?;
                }
                Ok(options)
            }
            other => Err(OptionsError::NotAnObject(json_kind(other))),
        }
    }

    fn read_map<P: WrongTypePolicy>(map: &Map<String, Value>) -> Result<Self, P::Error> {
        let reader = FieldReader::<P> {
            map,
            _policy: PhantomData,
        };
        let mut options = Self::default();

        if let Some(min_font) = reader.read("min_font", "a number", number)? {
            options.min_font = min_font;
        }
        if let Some(max_font) = reader.read("max_font", "a number", number)? {
            options.max_font = max_font;
        }
        if let Some(orderby) = reader.read("orderby", "a string", string)? {
            options.orderby = OrderBy::parse(&orderby);
        }
        if let Some(order) = reader.read("order", "an integer", integer)? {
            options.order = SortOrder::from_multiplier(order);
        }
        if let Some(unit) = reader.read("unit", "a string", string)? {
            options.unit = unit;
        }
        if let Some(amount) = reader.read("amount", "an integer", integer)? {
            options.amount = usize::try_from(amount).ok().filter(|n| *n > 0);
        }
        if let Some(separator) = reader.read("separator", "a string", string)? {
            options.separator = separator;
        }
        options.color = map.get("color").is_some_and(truthy);
        options.start_color = reader.read("start_color", "a string", string)?;
        options.end_color = reader.read("end_color", "a string", string)?;
        options.escape_html = map.get("escape_html").is_some_and(truthy);

        Ok(options)
    }
}

/// Outcome of reading one option value.
enum Field<T> {
    Set(T),
    Unset,
    WrongType,
}

/// What a reader does with an option value of the wrong type.
trait WrongTypePolicy {
    type Error;

    fn wrong_type(
        field: &'static str,
        expected: &'static str,
        value: &Value,
    ) -> Result<(), Self::Error>;
}

/// Logs and falls back to the default. Cannot fail.
struct Lenient;

impl WrongTypePolicy for Lenient {
    type Error = Infallible;

    fn wrong_type(
        field: &'static str,
        expected: &'static str,
        value: &Value,
    ) -> Result<(), Infallible> {
        tracing::warn!(
            field,
            expected,
            kind = json_kind(value),
            "Ignoring tag cloud option with the wrong type"
        );
        Ok(())
    }
}

/// Rejects the whole option map.
struct Strict;

impl WrongTypePolicy for Strict {
    type Error = OptionsError;

    fn wrong_type(
        field: &'static str,
        expected: &'static str,
        _: &Value,
    ) -> Result<(), OptionsError> {
        Err(OptionsError::WrongType { field, expected })
    }
}

struct FieldReader<'a, P> {
    map: &'a Map<String, Value>,
    _policy: PhantomData<P>,
}

impl<P: WrongTypePolicy> FieldReader<'_, P> {
    fn read<T>(
        &self,
        field: &'static str,
        expected: &'static str,
        parse: fn(&Value) -> Field<T>,
    ) -> Result<Option<T>, P::Error> {
        let Some(value) = self.map.get(field) else {
            return Ok(None);
        };

        match parse(value) {
            Field::Set(v) => Ok(Some(v)),
            Field::Unset => Ok(None),
            Field::WrongType => P::wrong_type(field, expected, value).map(|()| None),
        }
    }
}

fn number(value: &Value) -> Field<f64> {
    match value {
        Value::Null | Value::Bool(false) => Field::Unset,
        Value::Number(n) => match n.as_f64() {
            Some(n) if n == 0.0 => Field::Unset,
            Some(n) => Field::Set(n),
            None => Field::WrongType,
        },
        Value::String(s) if s.is_empty() => Field::Unset,
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(n) if n == 0.0 => Field::Unset,
            Ok(n) if n.is_finite() => Field::Set(n),
            _ => Field::WrongType,
        },
        _ => Field::WrongType,
    }
}

fn integer(value: &Value) -> Field<i64> {
    match number(value) {
        Field::Set(n) if n.fract() == 0.0 => Field::Set(n as i64),
        Field::Set(_) => Field::WrongType,
        Field::Unset => Field::Unset,
        Field::WrongType => Field::WrongType,
    }
}

fn string(value: &Value) -> Field<String> {
    match value {
        Value::Null | Value::Bool(false) => Field::Unset,
        Value::String(s) if s.is_empty() => Field::Unset,
        Value::String(s) => Field::Set(s.clone()),
        _ => Field::WrongType,
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
