use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq::{FaqEntry, FaqSection};
use crate::components::stars::{ArcPosition, ArcStars, BorderStars};
use crate::config;
use crate::Route;

const PROS: &[&str] = &[
    "Diriges una consultora boutique con clientes corporativos activos.",
    "Facturas de forma estable y quieres capital para crecer sin ceder control.",
    "Tienes márgenes sanos pero la operación depende demasiado de ti.",
    "Quieres procesos de entrega documentados antes de levantar una ronda.",
    "Piensas en años, no en trimestres.",
];

const CONS: &[&str] = &[
    "Buscas financiamiento para una idea que todavía no factura.",
    "Quieres capital para cubrir deudas operativas del mes pasado.",
    "Esperas que el dinero resuelva un problema de entrega desordenada.",
    "Cambias de modelo de negocio cada vez que aparece una tendencia nueva.",
    "No estás dispuesto a abrir tus números reales.",
];

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "¿Qué tipo de capital ofrecen?",
            answer: "Capital de crecimiento para consultoras que ya facturan: financiamiento sobre ingresos recurrentes, sin dilución y sin garantías personales.",
        },
        FaqEntry {
            question: "¿Cuánto tarda el proceso?",
            answer: "La revisión inicial toma menos de una semana. Si hay encaje, la propuesta formal llega dentro de los 15 días siguientes.",
        },
        FaqEntry {
            question: "¿Necesito abrir mis números?",
            answer: "Sí. Trabajamos únicamente con números reales verificados. Si eso es un problema, este programa no es para ti.",
        },
    ]
}

#[function_component(Capital)]
pub fn capital() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="capital-page">
            <header class="capital-hero">
                <div class="arc-shell arc-shell-top"></div>
                <ArcStars position={ArcPosition::Top} />

                <div class="capital-hero-content">
                    <h1 class="fade-up">
                        {"Capital para consultoras "}
                        <span class="capital-accent">{"que ya funcionan."}</span>
                    </h1>
                    <p class="capital-subtitle fade-up delay-1">
                        {"Financiamiento de crecimiento sin dilución para consultoras boutique con ingresos probados."}
                    </p>

                    <div class="capital-cta-group fade-up delay-2">
                        <a href="#aplicar" class="capital-cta">{"Aplicar ahora"}</a>
                        <p class="capital-note">{"Sin garantías personales. Sin ceder equity."}</p>
                    </div>
                </div>
            </header>

            <section class="audience-section">
                <div class="audience-tag">{"¿Para quién es?"}</div>
                <h2>{"Capital con criterio"}</h2>
                <p class="audience-subtitle">
                    {"No financiamos ideas: financiamos operaciones que ya demostraron que funcionan."}
                </p>

                <div class="audience-grid">
                    <div class="audience-card audience-yes">
                        <h3>{"Para quién es esto..."}</h3>
                        <ul>
                            { for PROS.iter().map(|item| html! {
                                <li>
                                    <span class="list-mark mark-yes">{"✔"}</span>
                                    <p>{*item}</p>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div class="audience-card audience-no">
                        <h3>{"Para quién no es esto..."}</h3>
                        <ul>
                            { for CONS.iter().map(|item| html! {
                                <li>
                                    <span class="list-mark mark-no">{"✕"}</span>
                                    <p>{*item}</p>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            </section>

            <section class="apply-section" id="aplicar">
                <h2>{"Solicita una evaluación"}</h2>
                <p class="apply-subtitle">{"Quince minutos de formulario. Una semana de respuesta."}</p>
                <div class="apply-card">
                    <BorderStars />
                    <iframe
                        src={config::get_application_form_url()}
                        title="Formulario de evaluación"
                        loading="lazy"
                    ></iframe>
                </div>
            </section>

            <FaqSection entries={faq_entries()} />

            <footer class="capital-footer">
                <p>{"© 2025 Capital Program"}</p>
                <div class="capital-footer-links">
                    <Link<Route> to={Route::Privacy}>{"Privacidad"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Términos"}</Link<Route>>
                </div>
            </footer>

            <style>
                {r#"
                .capital-page {
                    position: relative;
                    min-height: 100vh;
                    background: #fff;
                    color: #000;
                }

                .fade-up {
                    opacity: 0;
                    animation: fade-up 0.8s ease forwards;
                }

                .fade-up.delay-1 { animation-delay: 0.2s; }
                .fade-up.delay-2 { animation-delay: 0.4s; }

                @keyframes fade-up {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .capital-hero {
                    position: relative;
                    min-height: 85vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding-top: 8rem;
                    overflow: hidden;
                    background: #fff;
                }

                .capital-hero-content {
                    position: relative;
                    z-index: 20;
                    text-align: center;
                    max-width: 896px;
                    padding: 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .capital-hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4rem);
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    margin-bottom: 1.5rem;
                }

                .capital-accent {
                    font-family: Georgia, 'Times New Roman', serif;
                    font-style: italic;
                    font-weight: 400;
                    color: #001f3f;
                }

                .capital-subtitle {
                    font-size: 1.125rem;
                    color: #6b7280;
                    max-width: 640px;
                    margin-bottom: 3rem;
                }

                .capital-cta-group {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }

                .capital-cta {
                    background: #001f3f;
                    color: #fff;
                    padding: 1.25rem 4rem;
                    border-radius: 16px;
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-decoration: none;
                    box-shadow: 0 20px 40px -10px rgba(0, 31, 63, 0.4);
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }

                .capital-cta:hover {
                    transform: scale(1.05);
                    opacity: 0.9;
                }

                .capital-note {
                    font-size: 0.875rem;
                    color: #9ca3af;
                    font-style: italic;
                }

                .arc-shell {
                    position: absolute;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 150%;
                    aspect-ratio: 2 / 1;
                    background: #fff;
                    border-radius: 100%;
                    z-index: 10;
                }

                .arc-shell-top {
                    top: 0;
                    transform: translateX(-50%) rotate(180deg);
                    box-shadow: inset 0 -2px 20px #2ca01c, 0 10px 50px 1px rgba(44, 160, 28, 0.1);
                    border-bottom: 1px solid rgba(44, 160, 28, 0.1);
                }

                .audience-section {
                    padding: 6rem 1.5rem;
                    position: relative;
                    z-index: 20;
                    background: #fff;
                    text-align: center;
                }

                .audience-tag {
                    display: inline-block;
                    border: 1px solid rgba(0, 31, 63, 0.2);
                    border-radius: 9999px;
                    padding: 0.25rem 1rem;
                    font-size: 0.75rem;
                    font-style: italic;
                    opacity: 0.7;
                    color: #001f3f;
                    margin-bottom: 2rem;
                }

                .audience-section h2 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    margin-bottom: 2rem;
                }

                .audience-subtitle {
                    font-size: 1.125rem;
                    color: #6b7280;
                    font-style: italic;
                    max-width: 768px;
                    margin: 0 auto 4rem;
                }

                .audience-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    max-width: 1280px;
                    margin: 0 auto;
                }

                .audience-card {
                    background: #f9fafb;
                    border-radius: 24px;
                    padding: 2rem;
                    text-align: left;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .audience-yes {
                    border: 1px solid rgba(44, 160, 28, 0.2);
                }

                .audience-no {
                    border: 1px solid #e5e7eb;
                }

                .audience-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    font-style: italic;
                    margin-bottom: 2rem;
                }

                .audience-yes h3 {
                    color: #2ca01c;
                }

                .audience-no h3 {
                    color: #9ca3af;
                }

                .audience-card ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .audience-card li {
                    display: flex;
                    gap: 1rem;
                }

                .list-mark {
                    flex-shrink: 0;
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-size: 0.75rem;
                }

                .mark-yes { background: #2ca01c; }
                .mark-no { background: #9ca3af; }

                .audience-yes li p {
                    font-size: 0.875rem;
                    color: #4b5563;
                    line-height: 1.6;
                }

                .audience-no li p {
                    font-size: 0.875rem;
                    color: #9ca3af;
                    line-height: 1.6;
                }

                .apply-section {
                    padding: 6rem 1.5rem;
                    position: relative;
                    z-index: 20;
                    background: #fff;
                    text-align: center;
                }

                .apply-section h2 {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .apply-subtitle {
                    color: #6b7280;
                    margin-bottom: 3rem;
                }

                .apply-card {
                    position: relative;
                    max-width: 768px;
                    margin: 0 auto;
                    background: #f9fafb;
                    border: 1px solid rgba(44, 160, 28, 0.2);
                    border-radius: 24px;
                    padding: 1rem;
                    box-shadow: 0 20px 80px -20px rgba(0, 31, 63, 0.2);
                }

                .apply-card iframe {
                    width: 100%;
                    height: 560px;
                    border: none;
                    border-radius: 16px;
                    background: transparent;
                }

                .capital-footer {
                    background: #fff;
                    border-top: 1px solid #f3f4f6;
                    padding: 3rem 1.5rem;
                    position: relative;
                    z-index: 20;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    color: #9ca3af;
                    font-size: 0.75rem;
                }

                .capital-footer-links {
                    display: flex;
                    gap: 2rem;
                }

                .capital-footer-links a {
                    color: #9ca3af;
                    text-decoration: none;
                }

                .capital-footer-links a:hover {
                    text-decoration: underline;
                }

                @media (max-width: 768px) {
                    .audience-grid {
                        grid-template-columns: 1fr;
                    }

                    .capital-footer {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
