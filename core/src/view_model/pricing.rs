// food_ordering/src/view_model/pricing.rs

//! Display formatting of cart totals.

use crate::error::{OrderingError, OrderingResult};
use crate::models::CartLine;
use rusty_money::{iso, Money};

/// Formats amounts in one ISO currency.
#[derive(Debug, Clone, Copy)]
pub struct PriceFormatter {
  currency: &'static iso::Currency,
}

impl PriceFormatter {
  pub fn new(code: &str) -> OrderingResult<Self> {
    let currency = iso::find(code).ok_or_else(|| OrderingError::UnknownCurrency(code.to_string()))?;
    Ok(Self { currency })
  }

  pub fn currency_code(&self) -> &'static str {
    self.currency.iso_alpha_code
  }

  /// Rounds to the currency's minor unit and renders it, e.g. `$25.50`.
  pub fn format(&self, amount: f64) -> String {
    let scale = 10_f64.powi(self.currency.exponent as i32);
    let minor = (amount * scale).round() as i64;
    Money::from_minor(minor, self.currency).to_string()
  }
}

/// Floating-point sum of `quantity × cost`. Display only, not for settlement.
pub fn cart_total(cart: &[CartLine]) -> f64 {
  cart.iter().map(CartLine::subtotal).sum()
}
