use thiserror::Error;

/// Client-side checks that cancel a form submission. `Display` is the text
/// shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Выберите лошадь для ставки")]
    NoHorseSelected,

    /// Bet button pressed on a race card with no horse card selected.
    #[error("Пожалуйста, выберите лошадь для ставки")]
    NothingToOpen,

    /// Modal draft reached submission without a horse id.
    #[error("Пожалуйста, выберите лошадь")]
    DraftWithoutHorse,

    #[error("Минимальная сумма ставки - {min} ₽")]
    BelowMinimumStake { min: f64 },

    #[error("Недостаточно средств на балансе")]
    InsufficientBalance,

    #[error("Минимальная сумма - {min} ₽")]
    BelowMinimumAmount { min: f64 },

    #[error("Введите email адрес")]
    EmptyEmail,
}

/// Failures of a JSON round trip against the site's endpoints.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered `success: false`.
    #[error("Ошибка: {0}")]
    Rejected(String),

    #[error("Ошибка сети: {0}")]
    Network(#[source] gloo::net::Error),

    #[error("Ошибка сети: некорректный ответ сервера ({0})")]
    MalformedResponse(String),
}

/// A `data-*` override on the host element that could not be applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },
}

/// Problems reading the host page before anything is mounted.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("missing host element #{0}")]
    MissingElement(&'static str),

    #[error("invalid page payload: {0}")]
    Payload(#[from] serde_json::Error),
}
