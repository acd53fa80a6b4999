use super::{Form, FormData, FormErrors, optional_text};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CouponEntry {
    pub code: Option<String>,
}

/// Coupon code box. Leaving it empty is allowed.
pub struct CouponForm {
    data: FormData,
}

impl CouponForm {
    pub fn new(data: FormData) -> Self {
        Self { data }
    }
}

impl Form for CouponForm {
    type Output = CouponEntry;

    fn validate(&self) -> Result<CouponEntry, FormErrors> {
        Ok(CouponEntry {
            code: optional_text(&self.data, "code"),
        })
    }
}
