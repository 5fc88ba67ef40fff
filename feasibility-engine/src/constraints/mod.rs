//! The seven hard constraints. Soft constraints live under
//! [`soft`].

pub mod consecutive_night;
pub mod juhu;
pub mod monthly_night;
pub mod night_off_day;
pub mod shift_order;
pub mod staffing;
pub mod weekly_off;

pub mod soft;
