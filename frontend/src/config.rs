#[cfg(debug_assertions)]
pub fn get_prediction_url() -> &'static str {
    "http://localhost:5000/predict"
}

#[cfg(not(debug_assertions))]
pub fn get_prediction_url() -> &'static str {
    "https://abdullah0307.pythonanywhere.com/predict"
}
