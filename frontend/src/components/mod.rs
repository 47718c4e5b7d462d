// Reusable components live here.

pub mod notification_banner;
