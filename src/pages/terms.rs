use yew::prelude::*;

use crate::components::legal::LegalPage;
use crate::content::{self, Icon};

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <LegalPage
            document={content::terms_of_service()}
            icon={Icon::Scale}
            class="terms-of-service-page"
        />
    }
}
