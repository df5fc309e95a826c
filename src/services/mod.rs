// pocketcalc services
// Services provide core functionality: evaluation, conversion, tips, theming, settings and host collaborators.

pub mod collaborators;
pub mod expression_evaluator;
pub mod number_format;
pub mod settings_engine;
pub mod theme_engine;
pub mod tip_calculator;
pub mod unit_converter;
