pub mod checkout;
pub mod city;
pub mod forms;
pub mod shared;
