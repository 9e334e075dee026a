use yew::prelude::*;

fn legal_styles() -> Html {
    html! {
        <style>
            {r#"
            .legal-page {
                min-height: 100vh;
                background: #fff;
                padding: 10rem 1.5rem 6rem;
                position: relative;
                z-index: 20;
            }

            .legal-page > div {
                max-width: 768px;
                margin: 0 auto;
            }

            .legal-page h1 {
                font-size: 2.25rem;
                font-weight: 700;
                color: #000;
                margin-bottom: 3rem;
            }

            .legal-page section {
                margin-bottom: 2.5rem;
            }

            .legal-page h2 {
                font-size: 1.25rem;
                font-weight: 600;
                color: #001f3f;
                margin-bottom: 1rem;
            }

            .legal-page p {
                color: #6b7280;
                line-height: 1.7;
                margin-bottom: 1rem;
            }
            "#}
        </style>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-page">
            <div>
                <h1>{"Terms and Conditions"}</h1>
                <section>
                    <h2>{"1. Acceptance of Terms"}</h2>
                    <p>{"By accessing any of our sites or submitting an application form, you agree to these terms. If you do not agree, do not use the sites."}</p>
                </section>
                <section>
                    <h2>{"2. Services"}</h2>
                    <p>{"The sites describe products and consulting programs offered by us. Nothing on these pages constitutes financial advice, and outcomes described in testimonials are not guarantees."}</p>
                </section>
                <section>
                    <h2>{"3. Applications"}</h2>
                    <p>{"Application forms are processed by a third-party provider. Submitting one does not create a client relationship; we review every application and reply only where there is a fit."}</p>
                </section>
                <section>
                    <h2>{"4. Intellectual Property"}</h2>
                    <p>{"All content, branding and copy on these sites belongs to us or its respective owners and may not be reproduced without permission."}</p>
                </section>
            </div>
            { legal_styles() }
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <div>
                <h1>{"Privacy Policy"}</h1>
                <section>
                    <h2>{"What we collect"}</h2>
                    <p>{"The sites themselves store nothing: no accounts, no cookies of our own, no analytics identifiers. The only data you can hand us is what you type into the embedded application form."}</p>
                </section>
                <section>
                    <h2>{"The application form"}</h2>
                    <p>{"The form is served by a third-party provider inside an iframe and its contents go directly to them. Their privacy policy governs that data; we only receive the submitted answers."}</p>
                </section>
                <section>
                    <h2>{"Contact"}</h2>
                    <p>{"To have your application data removed, write to hello@alcove.news and we will pass the deletion request to the form provider within 72 hours."}</p>
                </section>
            </div>
            { legal_styles() }
        </div>
    }
}
