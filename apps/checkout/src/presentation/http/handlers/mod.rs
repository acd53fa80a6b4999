pub mod checkout;
pub mod coupons;
pub mod docs;
pub mod health;
pub mod refunds;
