//! Footer component

use chrono::{Datelike, Local};
use leptos::*;

use crate::ORGANIZATION;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Local::now().year();

    view! {
        <footer id="contact" class="footer">
            <div class="footer-bottom">
                <p>"© " {year} " " {ORGANIZATION} ". All rights reserved."</p>
            </div>
        </footer>
    }
}
