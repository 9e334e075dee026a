#[cfg(debug_assertions)]
pub fn get_application_form_url() -> &'static str {
    "http://localhost:8080/form-preview.html"  // Local stand-in when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_application_form_url() -> &'static str {
    "https://tally.so/embed/3xLqBo?hideTitle=1&transparentBackground=1"
}
