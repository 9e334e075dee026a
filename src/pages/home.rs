use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq::{FaqEntry, FaqSection};
use crate::components::stars::{ArcPosition, ArcStars};
use crate::Route;

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "How will this help me make better thumbnails?",
            answer: "Thumbnails don't live in a vacuum. They are seen by viewers surrounded by tons of other videos. Previewing your thumbnails within YouTube's UI is the best way to see if your video is clickable and fix any issues early on.",
        },
        FaqEntry {
            question: "Do you have an affiliate program?",
            answer: "Yes! You can apply to be an affiliate and receive lifetime commissions on every subscription you help secure.",
        },
        FaqEntry {
            question: "What can collaborators do?",
            answer: "Collaborators can preview any thumbnail/title in your project and comment. They cannot add or remove thumbnails or see your inspiration board.",
        },
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <header class="hero">
                <div class="arc-shell arc-shell-top"></div>
                <ArcStars position={ArcPosition::Top} />

                <div class="hero-content">
                    <div class="hero-icon fade-up">
                        <img
                            src="/assets/alcove-mark.png"
                            alt="Alcove"
                        />
                    </div>

                    <h1 class="fade-up delay-1">
                        {"A quiet place to "}
                        <br />
                        <span class="hero-accent">{"see what's new."}</span>
                    </h1>

                    <div class="video-frame fade-up delay-2">
                        <div class="play-overlay">
                            <div class="play-button">
                                <div class="play-triangle"></div>
                            </div>
                        </div>
                        <img
                            src="/assets/studio-preview.jpg"
                            alt="Product walkthrough"
                            loading="lazy"
                        />
                        <div class="video-badge">{"Watch the video"}</div>
                    </div>

                    <div class="hero-cta-group fade-up delay-3">
                        <a href="#home-faq" class="hero-cta">{"Get Started"}</a>
                        <div class="social-proof">
                            <div class="avatar-row">
                                <img src="/assets/creators/ava-1.jpg" alt="Creator" />
                                <img src="/assets/creators/ava-2.jpg" alt="Creator" />
                                <img src="/assets/creators/ava-3.jpg" alt="Creator" />
                                <img src="/assets/creators/ava-4.jpg" alt="Creator" />
                                <img src="/assets/creators/ava-5.jpg" alt="Creator" />
                            </div>
                            <div class="rating-row">
                                <span class="rating-stars">{"★★★★★"}</span>
                                <p>{"21+ happy creators"}</p>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="arc-shell arc-shell-bottom"></div>
                <ArcStars position={ArcPosition::Bottom} />

                <div class="hero-byline">
                    <span>{"© 2025"}</span>
                    <span>{"—"}</span>
                    <a href="https://youtube.com/@AlcoveNews" target="_blank" rel="noopener noreferrer">{"@AlcoveNews"}</a>
                </div>
            </header>

            <section class="channels-section" id="channels">
                <h2>{"Powering the biggest channels in the world"}</h2>
                <div class="channel-orbit">
                    <div class="orbit-core">
                        <div class="orbit-core-inner">
                            <div class="orbit-core-mark"></div>
                        </div>
                    </div>

                    <div class="channel-card card-top-left">
                        <img src="/assets/channels/beast.jpg" alt="MrBeast" />
                        <div>
                            <div class="channel-name">{"MrBeast"}<span class="verified-mark">{"✔"}</span></div>
                            <div class="channel-subs">{"336M subscribers"}</div>
                        </div>
                    </div>

                    <div class="channel-card card-bottom-left">
                        <img src="/assets/channels/redbull.jpg" alt="Red Bull" />
                        <div>
                            <div class="channel-name">{"Red Bull"}<span class="verified-mark">{"✔"}</span></div>
                            <div class="channel-subs">{"17.6M subscribers"}</div>
                        </div>
                    </div>

                    <div class="channel-card card-top-right">
                        <img src="/assets/channels/dude-perfect.jpg" alt="Dude Perfect" />
                        <div>
                            <div class="channel-name">{"Dude Perfect"}<span class="verified-mark">{"✔"}</span></div>
                            <div class="channel-subs">{"60.1M subscribers"}</div>
                        </div>
                    </div>

                    <div class="channel-card card-bottom-right">
                        <img src="/assets/channels/kai.jpg" alt="Kai Cenat Live" />
                        <div>
                            <div class="channel-name">{"Kai Cenat Live"}<span class="verified-mark">{"✔"}</span></div>
                            <div class="channel-subs">{"11.1M subscribers"}</div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="insights-section" id="insights">
                <div class="insights-tag">{"New"}</div>
                <h2>{"AI insights into strengths and flaws"}</h2>
                <p class="insights-subtitle">{"Discover potential problems with your thumbnails before they go live"}</p>

                <div class="insights-stage">
                    <img
                        src="/assets/insights-demo.jpg"
                        alt="Thumbnail analysis"
                        loading="lazy"
                    />
                    <div class="insight-callout callout-strength fade-up delay-1">
                        <span class="callout-icon callout-good">{"✔"}</span>
                        <p>{"High contrast between the bright hamster and stormy background creates a dramatic, attention-grabbing effect."}</p>
                    </div>
                    <div class="insight-callout callout-flaw fade-up delay-2">
                        <span class="callout-icon callout-bad">{"!"}</span>
                        <p>{"The image compositing appears artificial, which could detract from its impact for some viewers."}</p>
                    </div>
                </div>
            </section>

            <div id="home-faq">
                <FaqSection entries={faq_entries()} open_first={true} />
            </div>

            <footer class="site-footer">
                <div class="footer-grid">
                    <div>
                        <h4>{"Follow the creator"}</h4>
                        <p>{"Created by a YouTuber building tools for content creators."}</p>
                        <div class="footer-socials">
                            <a href="https://youtube.com/@AlcoveNews" target="_blank" rel="noopener noreferrer">{"YouTube"}</a>
                            <a href="https://instagram.com/alcovenews" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                            <a href="https://twitter.com/alcovenews" target="_blank" rel="noopener noreferrer">{"Twitter"}</a>
                        </div>
                    </div>
                    <div>
                        <h4>{"Affiliate Program"}</h4>
                        <p>{"Earn lifetime commissions on every subscription you help secure."}</p>
                        <a href="mailto:affiliates@alcove.news" class="footer-button">{"Join Now"}</a>
                    </div>
                    <div>
                        <h4>{"Contact Us"}</h4>
                        <p>{"Have questions or want to report an issue? We'll respond within 24hrs."}</p>
                        <a href="mailto:hello@alcove.news" class="footer-button">{"Send Message"}</a>
                    </div>
                </div>
                <div class="footer-legal">
                    <p>{"© 2025 Alcove"}</p>
                    <div class="footer-legal-links">
                        <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                        <Link<Route> to={Route::Terms}>{"Terms and Conditions"}</Link<Route>>
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                .home-page {
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

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding-top: 10rem;
                    overflow: hidden;
                    background: #fff;
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

                .arc-shell-bottom {
                    bottom: 0;
                    box-shadow: inset 0 2px 20px #2ca01c, 0 -10px 50px 1px rgba(44, 160, 28, 0.1);
                    border-top: 1px solid rgba(44, 160, 28, 0.1);
                }

                .hero-content {
                    position: relative;
                    z-index: 20;
                    text-align: center;
                    max-width: 1024px;
                    padding: 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    margin-bottom: 8rem;
                }

                .hero-icon img {
                    width: 6rem;
                    height: 6rem;
                    object-fit: contain;
                    margin-bottom: 4rem;
                }

                .hero h1 {
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    margin-bottom: 5rem;
                }

                .hero-accent {
                    font-family: Georgia, 'Times New Roman', serif;
                    font-style: italic;
                    font-weight: 400;
                    color: #001f3f;
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
                    margin-bottom: 6rem;
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

                .hero-cta-group {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2.5rem;
                }

                .hero-cta {
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

                .hero-cta:hover {
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

                .hero-byline {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 20;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #9ca3af;
                    font-size: 0.75rem;
                }

                .hero-byline a {
                    color: #001f3f;
                    text-decoration: none;
                }

                .hero-byline a:hover {
                    text-decoration: underline;
                }

                .channels-section {
                    padding: 6rem 1.5rem;
                    position: relative;
                    z-index: 20;
                    background: #fff;
                    text-align: center;
                }

                .channels-section h2 {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 4rem;
                }

                .channel-orbit {
                    position: relative;
                    height: 400px;
                    max-width: 1280px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .orbit-core {
                    position: relative;
                    z-index: 10;
                    width: 8rem;
                    height: 8rem;
                    background: #001f3f;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 0 50px rgba(0, 31, 63, 0.2);
                    border: 1px solid rgba(0, 31, 63, 0.1);
                }

                .orbit-core-inner {
                    width: 4rem;
                    height: 4rem;
                    background: #fff;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .orbit-core-mark {
                    width: 2rem;
                    height: 2rem;
                    background: #001f3f;
                    border-radius: 4px;
                    transform: rotate(45deg);
                }

                .channel-card {
                    position: absolute;
                    background: #f9fafb;
                    border: 1px solid #e5e7eb;
                    padding: 1rem;
                    border-radius: 16px;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    text-align: left;
                }

                .channel-card img {
                    width: 50px;
                    height: 50px;
                    border-radius: 50%;
                }

                .card-top-left { top: 0; left: 25%; }
                .card-bottom-left { bottom: 0; left: 33%; }
                .card-top-right { top: 25%; right: 25%; }
                .card-bottom-right { bottom: 25%; right: 33%; }

                .channel-name {
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                }

                .verified-mark {
                    color: #3b82f6;
                    font-size: 0.875rem;
                }

                .channel-subs {
                    font-size: 0.75rem;
                    color: #6b7280;
                }

                .insights-section {
                    padding: 6rem 1.5rem;
                    position: relative;
                    z-index: 20;
                    background: #fff;
                    text-align: center;
                    overflow: hidden;
                }

                .insights-tag {
                    display: inline-block;
                    background: rgba(44, 160, 28, 0.1);
                    color: #2ca01c;
                    font-weight: 700;
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    margin-bottom: 2rem;
                }

                .insights-section h2 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    max-width: 768px;
                    margin: 0 auto 1.5rem;
                    line-height: 1.2;
                }

                .insights-subtitle {
                    font-size: 1.125rem;
                    color: #6b7280;
                    margin-bottom: 4rem;
                }

                .insights-stage {
                    position: relative;
                    max-width: 896px;
                    margin: 0 auto;
                }

                .insights-stage > img {
                    width: 100%;
                    border-radius: 24px;
                    border: 1px solid #e5e7eb;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }

                .insight-callout {
                    position: absolute;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(12px);
                    padding: 1.5rem;
                    border-radius: 16px;
                    max-width: 20rem;
                    text-align: left;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                }

                .insight-callout p {
                    font-size: 0.875rem;
                    color: #374151;
                    line-height: 1.6;
                }

                .callout-strength {
                    left: -3rem;
                    top: 25%;
                    border: 2px solid #2ca01c;
                }

                .callout-flaw {
                    right: -3rem;
                    bottom: 25%;
                    border: 2px solid #ef4444;
                }

                .callout-icon {
                    flex-shrink: 0;
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-size: 0.875rem;
                }

                .callout-good { background: #2ca01c; }
                .callout-bad { background: #ef4444; }

                @media (max-width: 1024px) {
                    .insight-callout {
                        display: none;
                    }
                }

                .site-footer {
                    background: #fff;
                    border-top: 1px solid #f3f4f6;
                    padding: 6rem 1.5rem;
                    position: relative;
                    z-index: 20;
                }

                .footer-grid {
                    max-width: 1280px;
                    margin: 0 auto 4rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 4rem;
                }

                .footer-grid h4 {
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .footer-grid p {
                    font-size: 0.875rem;
                    color: #6b7280;
                    margin-bottom: 1.5rem;
                }

                .footer-socials {
                    display: flex;
                    gap: 1rem;
                }

                .footer-socials a {
                    padding: 0.5rem 1rem;
                    background: #f9fafb;
                    border-radius: 9999px;
                    color: #001f3f;
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }

                .footer-socials a:hover {
                    background: #f3f4f6;
                }

                .footer-button {
                    display: inline-block;
                    background: #f9fafb;
                    border: 1px solid #e5e7eb;
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    color: #001f3f;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }

                .footer-button:hover {
                    background: #f3f4f6;
                }

                .footer-legal {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding-top: 2rem;
                    border-top: 1px solid #f3f4f6;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    color: #9ca3af;
                    font-size: 0.75rem;
                }

                .footer-legal-links {
                    display: flex;
                    gap: 2rem;
                }

                .footer-legal-links a {
                    color: #9ca3af;
                    text-decoration: none;
                }

                .footer-legal-links a:hover {
                    text-decoration: underline;
                }

                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                        text-align: center;
                    }

                    .footer-socials {
                        justify-content: center;
                    }

                    .footer-legal {
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .channel-orbit {
                        height: auto;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .channel-card {
                        position: static;
                    }

                    .orbit-core {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
