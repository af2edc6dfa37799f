use yew::prelude::*;

use crate::components::legal::LegalPage;
use crate::content::{self, Icon};

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage
            document={content::privacy_policy()}
            icon={Icon::Shield}
            class="privacy-policy-page"
        />
    }
}
