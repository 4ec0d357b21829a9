// Cheatsheets services
// Services hold site-wide preferences that are not collections.

pub mod theme_preference;
