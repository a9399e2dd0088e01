mod map_tests;
mod popup_tests;
