use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CoreError, Money};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
    Sandbox,
    Production,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    Card,
    #[serde(rename = "paypal")]
    PayPal,
    Invoice,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationChannel {
    Email,
    Sms,
    Console,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ShippingMethod {
    Standard,
    Expedited,
    FreeOverThreshold,
}

macro_rules! named_variants {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    other => Err(CoreError::UnknownVariant { kind: $kind, value: other.to_string() }),
                }
            }
        }
    };
}

named_variants!(Environment, "environment", { Sandbox => "sandbox", Production => "production" });
named_variants!(PaymentMethod, "payment method", { Card => "card", PayPal => "paypal", Invoice => "invoice" });
named_variants!(NotificationChannel, "notification channel", { Email => "email", Sms => "sms", Console => "console" });
named_variants!(ShippingMethod, "shipping method", {
    Standard => "standard",
    Expedited => "expedited",
    FreeOverThreshold => "free-over-threshold",
});

/// Process-wide checkout settings. Built once at startup and shared by
/// reference; nothing here is mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CheckoutConfig {
    pub store_name: String,
    pub currency: String,
    pub tax_rate: Money,
    pub flat_shipping_fee: Money,
    pub expedited_shipping_fee: Money,
    pub free_shipping_threshold: Money,
    pub environment: Environment,
    pub payment_method: PaymentMethod,
    pub notification_channel: NotificationChannel,
    pub shipping_method: ShippingMethod,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            store_name: "Pattern Checkout".to_string(),
            currency: "USD".to_string(),
            tax_rate: Money::new(825, 4),
            flat_shipping_fee: Money::new(799, 2),
            expedited_shipping_fee: Money::new(1999, 2),
            free_shipping_threshold: Money::new(10000, 2),
            environment: Environment::Sandbox,
            payment_method: PaymentMethod::Card,
            notification_channel: NotificationChannel::Email,
            shipping_method: ShippingMethod::Standard,
        }
    }
}

impl CheckoutConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let cfg: CheckoutConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.currency.trim().is_empty() {
            return Err(CoreError::invalid("config.currency", "must not be empty"));
        }
        let amounts = [
            ("config.tax_rate", self.tax_rate),
            ("config.flat_shipping_fee", self.flat_shipping_fee),
            ("config.expedited_shipping_fee", self.expedited_shipping_fee),
            ("config.free_shipping_threshold", self.free_shipping_threshold),
        ];
        for (field, amount) in amounts {
            if amount < Money::ZERO {
                return Err(CoreError::invalid(field, "must not be negative"));
            }
        }
        Ok(())
    }
}
