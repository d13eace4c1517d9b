use thiserror::Error;

const MAXIMUM: f64 = 1e15;

/// One of the six parameters a production plan is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Capacity,
    Budget,
    CostSweet,
    CostPlain,
    MinSweet,
    MinPlain,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Capacity,
        Field::Budget,
        Field::CostSweet,
        Field::CostPlain,
        Field::MinSweet,
        Field::MinPlain,
    ];

    /// Name used on the command line and in the form session.
    pub fn name(self) -> &'static str {
        match self {
            Field::Capacity => "capacity",
            Field::Budget => "budget",
            Field::CostSweet => "cost-sweet",
            Field::CostPlain => "cost-plain",
            Field::MinSweet => "min-sweet",
            Field::MinPlain => "min-plain",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Capacity => "Maximum production capacity (units)",
            Field::Budget => "Maximum budget (Rp)",
            Field::CostSweet => "Cost per unit of sweet bread (Rp)",
            Field::CostPlain => "Cost per unit of plain bread (Rp)",
            Field::MinSweet => "Minimum demand for sweet bread (units)",
            Field::MinPlain => "Minimum demand for plain bread (units)",
        }
    }

    /// Smallest value the field accepts.
    pub fn minimum(self) -> f64 {
        match self {
            Field::Capacity | Field::Budget | Field::CostSweet | Field::CostPlain => 1.,
            Field::MinSweet | Field::MinPlain => 0.,
        }
    }

    /// Largest value the field accepts. SCIP treats magnitudes from 1e20 up
    /// as infinite, so every coefficient and bound stays well below that.
    pub fn maximum(self) -> f64 {
        MAXIMUM
    }

    pub fn default_value(self) -> f64 {
        match self {
            Field::Capacity => 1000.,
            Field::Budget => 1_800_000.,
            Field::CostSweet => 2000.,
            Field::CostPlain => 1500.,
            Field::MinSweet => 300.,
            Field::MinPlain => 400.,
        }
    }

    /// Looks a field up by name. Underscores are accepted in place of dashes.
    pub fn from_name(name: &str) -> Option<Field> {
        let name = name.trim().to_ascii_lowercase().replace('_', "-");
        Field::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Checks that `value` lies in the field's domain.
    pub fn check(self, value: f64) -> Result<f64, InputError> {
        if !value.is_finite() {
            return Err(InputError::NonFinite {
                field: self.name(),
                value,
            });
        }
        if value < self.minimum() {
            return Err(InputError::BelowMinimum {
                field: self.name(),
                minimum: self.minimum(),
                value,
            });
        }
        if value > self.maximum() {
            return Err(InputError::AboveMaximum {
                field: self.name(),
                maximum: self.maximum(),
                value,
            });
        }
        Ok(value)
    }

    /// Parses and checks a raw value typed by the user.
    pub fn parse(self, raw: &str) -> Result<f64, InputError> {
        let cleaned = raw.trim().replace('_', "");
        let value = cleaned
            .parse::<f64>()
            .map_err(|_| InputError::NotANumber {
                field: self.name(),
                raw: raw.to_string(),
            })?;
        self.check(value)
    }
}

/// Errors raised when a value enters the input form.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be a number, got {raw:?}")]
    NotANumber { field: &'static str, raw: String },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be at least {minimum}, got {value}")]
    BelowMinimum {
        field: &'static str,
        minimum: f64,
        value: f64,
    },

    #[error("{field} must be at most {maximum:e}, got {value:e}")]
    AboveMaximum {
        field: &'static str,
        maximum: f64,
        value: f64,
    },
}

/// The inputs of a single planning computation.
///
/// A request is a plain value: the form session keeps one around and
/// derives a new request every time a field changes, so a computation
/// always sees a consistent snapshot. Every value has passed
/// [`Field::check`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductionPlanRequest {
    capacity: f64,
    budget: f64,
    cost_sweet: f64,
    cost_plain: f64,
    min_sweet: f64,
    min_plain: f64,
}

impl Default for ProductionPlanRequest {
    fn default() -> Self {
        Self {
            capacity: Field::Capacity.default_value(),
            budget: Field::Budget.default_value(),
            cost_sweet: Field::CostSweet.default_value(),
            cost_plain: Field::CostPlain.default_value(),
            min_sweet: Field::MinSweet.default_value(),
            min_plain: Field::MinPlain.default_value(),
        }
    }
}

impl ProductionPlanRequest {
    /// Returns a copy of this request with `field` set to `value`.
    pub fn with(self, field: Field, value: f64) -> Result<Self, InputError> {
        let value = field.check(value)?;
        let mut next = self;
        *next.slot(field) = value;
        Ok(next)
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Capacity => self.capacity,
            Field::Budget => self.budget,
            Field::CostSweet => self.cost_sweet,
            Field::CostPlain => self.cost_plain,
            Field::MinSweet => self.min_sweet,
            Field::MinPlain => self.min_plain,
        }
    }

    fn slot(&mut self, field: Field) -> &mut f64 {
        match field {
            Field::Capacity => &mut self.capacity,
            Field::Budget => &mut self.budget,
            Field::CostSweet => &mut self.cost_sweet,
            Field::CostPlain => &mut self.cost_plain,
            Field::MinSweet => &mut self.min_sweet,
            Field::MinPlain => &mut self.min_plain,
        }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn cost_sweet(&self) -> f64 {
        self.cost_sweet
    }

    pub fn cost_plain(&self) -> f64 {
        self.cost_plain
    }

    pub fn min_sweet(&self) -> f64 {
        self.min_sweet
    }

    pub fn min_plain(&self) -> f64 {
        self.min_plain
    }
}
