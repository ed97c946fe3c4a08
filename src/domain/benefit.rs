use rust_decimal::Decimal;

/// The two kinds of discount a benefit can grant.
///
/// Benefits of any other kind (multi-buy, shipping, ...) cannot be represented: they are rejected
/// by `Benefit::parse`, which is the only way to obtain a `Benefit` from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenefitType {
    /// A discount expressed as a percentage of the price.
    Percentage,
    /// A discount of a fixed amount of money, labelled "Absolute" in stored offers.
    Fixed,
}

impl BenefitType {
    /// Map a stored type label to a `BenefitType`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Percentage" => Some(Self::Percentage),
            "Absolute" => Some(Self::Fixed),
            _ => None,
        }
    }

    /// Benefits created by program offers carry no type label, only the dotted path of their
    /// proxy class (e.g. `ecommerce.programs.benefits.PercentageDiscountBenefitWithoutRange`).
    pub fn from_proxy_class(proxy_class: &str) -> Option<Self> {
        let class_name = proxy_class.rsplit('.').next().unwrap_or(proxy_class);
        if class_name.starts_with("PercentageDiscountBenefit") {
            Some(Self::Percentage)
        } else if class_name.starts_with("AbsoluteDiscountBenefit") {
            Some(Self::Fixed)
        } else {
            None
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Percentage => "Percentage",
            Self::Fixed => "Absolute",
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BenefitError {
    #[error("`{0}` is not a supported benefit type.")]
    UnsupportedBenefitType(String),
    #[error("A benefit value cannot be negative, got {0}.")]
    NegativeValue(Decimal),
}

/// A benefit as it reaches us from the outside world, before validation.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct RawBenefit {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub proxy_class: Option<String>,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Benefit {
    kind: BenefitType,
    value: Decimal,
}

impl Benefit {
    pub fn new(kind: BenefitType, value: Decimal) -> Result<Self, BenefitError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(BenefitError::NegativeValue(value));
        }
        Ok(Self { kind, value })
    }

    /// An explicit, non-empty type label wins over the proxy class.
    pub fn parse(raw: RawBenefit) -> Result<Self, BenefitError> {
        let label = raw.kind.filter(|k| !k.trim().is_empty());
        let kind = match (&label, &raw.proxy_class) {
            (Some(label), _) => BenefitType::from_label(label)
                .ok_or_else(|| BenefitError::UnsupportedBenefitType(label.clone()))?,
            (None, Some(proxy_class)) => BenefitType::from_proxy_class(proxy_class)
                .ok_or_else(|| BenefitError::UnsupportedBenefitType(proxy_class.clone()))?,
            (None, None) => return Err(BenefitError::UnsupportedBenefitType("unspecified".into())),
        };
        Self::new(kind, raw.value)
    }

    pub fn kind(&self) -> BenefitType {
        self.kind
    }

    pub fn value(&self) -> Decimal {
        self.value
    }
}
