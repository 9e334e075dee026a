use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq::{FaqEntry, FaqSection};
use crate::components::stars::{ArcPosition, ArcStars, BorderStars};
use crate::config;
use crate::Route;

const VIDEO_NUDGE_DELAY_MS: u32 = 6_000;

const PROS: &[&str] = &[
    "Eres un consultor o creador que vende servicios digitales de alto valor.",
    "Ya estás facturando por encima de $10k-$15k/mes con tu servicio o expertise.",
    "Tienes clientes, y das resultados, pero tu entrega de servicio se siente desorganizada por dentro.",
    "Querés ordenar el negocio, simplificarlo y quedarte con más ganancia, evitando la complejidad.",
    "Buscas convertirte en una autoridad respetada dentro de tu nicho y elevar tu estatus.",
    "Preferís servir bien a tus clientes a largo plazo antes que cerrar rápido y quemar reputación.",
    "Estás dispuesto a ejecutar, iterar y sostener estándares altos durante 4-6 meses aunque duela.",
];

const CONS: &[&str] = &[
    "No vendés servicios digitales de alto valor ni eres un consultor o creador digital.",
    "Estás empezando y todavía no llegaste de forma consistente los $10k USD mensuales.",
    "Querés que alguien te arme el negocio mientras vos mirás, pero sin pagar un servicio DFY.",
    "Buscás hacer mucho dinero rápido, a costa de venderle a cualquiera sin trabajar en serio.",
    "Escuchas a muchos mentores y cambias de estrategia cada mes.",
    "Buscas un curso, un roadmap, un sistema plug & play o un grupo que te diga qué hacer.",
    "No estás listo para ejecutar de forma constante y con estándares altos sin gratificación inmediata.",
];

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "¿Cómo sé si Consulting OS™ es para mí?",
            answer: "Si vendes servicios digitales de alto valor, ya facturas de forma consistente y sientes que la entrega se desorganiza por dentro, es para ti. Si recién estás empezando, todavía no.",
        },
        FaqEntry {
            question: "¿Cuánto tiempo toma ver resultados?",
            answer: "Trabajamos en ciclos de 4 a 6 meses. Los primeros cambios de estructura se sienten en semanas, pero la autoridad y el margen se construyen sosteniendo estándares altos durante todo el ciclo.",
        },
        FaqEntry {
            question: "¿Es un curso o un servicio hecho por ustedes?",
            answer: "Ninguna de las dos cosas. No es un roadmap genérico ni un DFY donde miras desde afuera: es un sistema operativo que instalamos juntos en tu negocio, con tu ejecución.",
        },
        FaqEntry {
            question: "¿Qué pasa después de aplicar?",
            answer: "Revisamos tu aplicación, y si hay encaje te escribimos para agendar una llamada corta. No hay llamada de venta de 90 minutos ni presión; si no hay encaje, también te lo decimos.",
        },
    ]
}

#[function_component(Funding)]
pub fn funding() -> Html {
    let show_nudge = use_state(|| false);

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

    // The "did you watch it" nudge appears a while after landing. The
    // handle is dropped on unmount so the callback never fires into a
    // component that is gone.
    {
        let show_nudge = show_nudge.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(VIDEO_NUDGE_DELAY_MS, move || {
                    show_nudge.set(true);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div class="funding-page">
            <header class="funding-hero">
                <div class="funding-hero-content">
                    <h1 class="fade-up">
                        {"Ordena tu negocio. "}
                        <span class="funding-accent">{"Quédate con más ganancia."}</span>
                    </h1>
                    <p class="funding-subtitle fade-up delay-1">
                        {"Consulting OS™: el sistema operativo para consultores y creadores que ya facturan y quieren dejar de improvisar la entrega."}
                    </p>

                    <div class="video-frame fade-up delay-2">
                        <div class="play-overlay">
                            <div class="play-button">
                                <div class="play-triangle"></div>
                            </div>
                        </div>
                        <img
                            src="/assets/funding/vsl-cover.jpg"
                            alt="Video de presentación"
                            loading="lazy"
                        />
                        <div class="video-badge">{"Mira el video"}</div>
                    </div>

                    <div class="funding-cta-group fade-up delay-3">
                        <a href="#aplicar" class="funding-cta">{"Aplicar"}</a>
                        <div class="social-proof">
                            <div class="avatar-row">
                                <img src="/assets/funding/cli-1.jpg" alt="Cliente" />
                                <img src="/assets/funding/cli-2.jpg" alt="Cliente" />
                                <img src="/assets/funding/cli-3.jpg" alt="Cliente" />
                                <img src="/assets/funding/cli-4.jpg" alt="Cliente" />
                                <img src="/assets/funding/cli-5.jpg" alt="Cliente" />
                            </div>
                            <div class="rating-row">
                                <span class="rating-stars">{"★★★★★"}</span>
                                <p>{"21+ Clientes felices"}</p>
                            </div>
                        </div>
                        {
                            if *show_nudge {
                                html! {
                                    <p class="video-nudge">{"¿Ya viste el video?"}</p>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>

                <div class="arc-shell arc-shell-bottom"></div>
                <ArcStars position={ArcPosition::Bottom} />
            </header>

            <section class="audience-section">
                <div class="audience-tag">{"¿Para quién es?"}</div>
                <h2>{"No somos para todos..."}</h2>
                <p class="audience-subtitle">
                    {"Pero si estás acá, probablemente no seas como la mayoría. "}
                    <br />
                    {"Dejemos totalmente en claro para quién es "}
                    <span class="brand-word">{"Consulting OS™"}</span>
                    {" y quién debería evitarlo por completo:"}
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

            <section class="testimonials-section" id="testimonios">
                <h2>{"Lo que dicen los que ya están adentro"}</h2>
                <div class="testimonials-grid">
                    <div class="testimonial-card">
                        <p class="testimonial-quote">{"\"Pasé de tener todo en la cabeza a tener un sistema. Mismo equipo, misma facturación, el doble de margen de tiempo.\""}</p>
                        <div class="testimonial-author">
                            <img src="/assets/funding/testi-1.jpg" alt="Martín" />
                            <div>
                                <div class="author-name">{"Martín G."}</div>
                                <div class="author-role">{"Consultor de e-commerce"}</div>
                            </div>
                        </div>
                    </div>
                    <div class="testimonial-card">
                        <p class="testimonial-quote">{"\"Dejé de perseguir clientes nuevos cada mes. La entrega ordenada hizo que los que ya tenía se quedaran y refirieran.\""}</p>
                        <div class="testimonial-author">
                            <img src="/assets/funding/testi-2.jpg" alt="Carla" />
                            <div>
                                <div class="author-name">{"Carla R."}</div>
                                <div class="author-role">{"Creadora y mentora"}</div>
                            </div>
                        </div>
                    </div>
                    <div class="testimonial-card">
                        <p class="testimonial-quote">{"\"Lo que más valoro: nadie me vendió humo. Ejecuté, dolió, y a los cinco meses el negocio dejó de depender de mi memoria.\""}</p>
                        <div class="testimonial-author">
                            <img src="/assets/funding/testi-3.jpg" alt="Pablo" />
                            <div>
                                <div class="author-name">{"Pablo S."}</div>
                                <div class="author-role">{"Agencia de performance"}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="apply-section" id="aplicar">
                <h2>{"Aplica a Consulting OS™"}</h2>
                <p class="apply-subtitle">{"Cuéntanos de tu negocio. Revisamos cada aplicación a mano."}</p>
                <div class="apply-card">
                    <BorderStars />
                    <iframe
                        src={config::get_application_form_url()}
                        title="Formulario de aplicación"
                        loading="lazy"
                    ></iframe>
                </div>
            </section>

            <FaqSection entries={faq_entries()} open_first={true} />

            <footer class="funding-footer">
                <p>{"© 2025 Consulting OS™"}</p>
                <div class="funding-footer-links">
                    <Link<Route> to={Route::Privacy}>{"Privacidad"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Términos"}</Link<Route>>
                </div>
            </footer>

            <style>
                {r#"
                .funding-page {
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
                .fade-up.delay-3 { animation-delay: 0.6s; }

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

                .funding-hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding-top: 10rem;
                    overflow: hidden;
                    background: #fff;
                }

                .funding-hero-content {
                    position: relative;
                    z-index: 20;
                    text-align: center;
                    max-width: 1024px;
                    padding: 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    margin-bottom: 10rem;
                }

                .funding-hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4rem);
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    margin-bottom: 1.5rem;
                }

                .funding-accent {
                    font-family: Georgia, 'Times New Roman', serif;
                    font-style: italic;
                    font-weight: 400;
                    color: #001f3f;
                }

                .funding-subtitle {
                    font-size: 1.125rem;
                    color: #6b7280;
                    max-width: 640px;
                    margin-bottom: 4rem;
                }

                .video-frame {
                    position: relative;
                    width: 100%;
                    max-width: 896px;
                    aspect-ratio: 16 / 9;
                    background: #f3f4f6;
                    border-radius: 40px;
                    border: 8px solid #fff;
                    box-shadow: 0 20px 80px -20px rgba(0, 31, 63, 0.3);
                    overflow: hidden;
                    margin-bottom: 5rem;
                }

                .video-frame > img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.9;
                }

                .play-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 31, 63, 0.05);
                    z-index: 10;
                }

                .play-button {
                    width: 6rem;
                    height: 6rem;
                    background: #fff;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }

                .play-button:hover {
                    transform: scale(1.1);
                }

                .play-triangle {
                    width: 0;
                    height: 0;
                    border-top: 14px solid transparent;
                    border-bottom: 14px solid transparent;
                    border-left: 24px solid #001f3f;
                    margin-left: 0.5rem;
                }

                .video-badge {
                    position: absolute;
                    top: 2rem;
                    right: 2rem;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(12px);
                    color: #fff;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 700;
                    z-index: 20;
                }

                .funding-cta-group {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2.5rem;
                }

                .funding-cta {
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

                .funding-cta:hover {
                    transform: scale(1.05);
                    opacity: 0.9;
                }

                .social-proof {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }

                .avatar-row {
                    display: flex;
                }

                .avatar-row img {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: 4px solid #fff;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    margin-left: -1rem;
                }

                .avatar-row img:first-child {
                    margin-left: 0;
                }

                .rating-stars {
                    color: #facc15;
                    font-size: 1.25rem;
                    letter-spacing: 0.1em;
                }

                .rating-row p {
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: #9ca3af;
                    margin-top: 0.25rem;
                }

                .video-nudge {
                    font-size: 1rem;
                    font-style: italic;
                    color: #9ca3af;
                    animation: fade-up 0.8s ease forwards;
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

                .arc-shell-bottom {
                    bottom: 0;
                    box-shadow: inset 0 2px 20px #2ca01c, 0 -10px 50px 1px rgba(44, 160, 28, 0.1);
                    border-top: 1px solid rgba(44, 160, 28, 0.1);
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

                .brand-word {
                    font-weight: 700;
                    color: #001f3f;
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

                .testimonials-section {
                    padding: 6rem 1.5rem;
                    position: relative;
                    z-index: 20;
                    background: #fff;
                    text-align: center;
                }

                .testimonials-section h2 {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 4rem;
                }

                .testimonials-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 1280px;
                    margin: 0 auto;
                }

                .testimonial-card {
                    background: #f9fafb;
                    border: 1px solid #e5e7eb;
                    border-radius: 24px;
                    padding: 2rem;
                    text-align: left;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    gap: 2rem;
                }

                .testimonial-quote {
                    font-size: 0.95rem;
                    color: #374151;
                    line-height: 1.7;
                    font-style: italic;
                }

                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .testimonial-author img {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                }

                .author-name {
                    font-weight: 700;
                    font-size: 0.9rem;
                }

                .author-role {
                    font-size: 0.75rem;
                    color: #6b7280;
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

                .funding-footer {
                    background: #fff;
                    border-top: 1px solid #f3f4f6;
                    padding: 3rem 1.5rem;
                    position: relative;
                    z-index: 20;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    max-width: 100%;
                    color: #9ca3af;
                    font-size: 0.75rem;
                }

                .funding-footer-links {
                    display: flex;
                    gap: 2rem;
                }

                .funding-footer-links a {
                    color: #9ca3af;
                    text-decoration: none;
                }

                .funding-footer-links a:hover {
                    text-decoration: underline;
                }

                @media (max-width: 768px) {
                    .audience-grid,
                    .testimonials-grid {
                        grid-template-columns: 1fr;
                    }

                    .funding-footer {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
