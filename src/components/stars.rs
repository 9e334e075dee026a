use rand::Rng;
use yew::prelude::*;

pub const FIELD_STAR_COUNT: usize = 50;
pub const ARC_STAR_COUNT: usize = 12;
pub const BORDER_STAR_COUNT: usize = 8;

// Per-index stagger keeps looping particles out of phase.
pub const ARC_STAGGER_SECS: f64 = 2.0;
pub const BORDER_STAGGER_SECS: f64 = 1.5;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ColorVariant {
    Green,
    Navy,
}

impl ColorVariant {
    pub fn css_class(self) -> &'static str {
        match self {
            ColorVariant::Green => "star-green",
            ColorVariant::Navy => "star-navy",
        }
    }
}

/// One decorative dot. Drawn once at mount, never mutated afterwards;
/// only its CSS animation progress changes on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
    pub color: ColorVariant,
}

fn draw_color(rng: &mut impl Rng) -> ColorVariant {
    if rng.gen_bool(0.5) {
        ColorVariant::Green
    } else {
        ColorVariant::Navy
    }
}

/// Uniform draws for the background field. Unseeded on purpose: every
/// mount gets its own sky.
pub fn generate(count: usize) -> Vec<Particle> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|id| Particle {
            id,
            x: rng.gen_range(0.0..=100.0),
            y: rng.gen_range(0.0..=100.0),
            size: rng.gen_range(1.0..=3.0),
            duration: rng.gen_range(10.0..=30.0),
            delay: rng.gen_range(0.0..=10.0),
            color: draw_color(&mut rng),
        })
        .collect()
}

/// Particles for the elliptical hero arcs. Position comes from the path,
/// so x/y are only drawn to keep the record uniform; the delay is a fixed
/// per-index stagger.
pub fn generate_arc(count: usize) -> Vec<Particle> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|id| Particle {
            id,
            x: rng.gen_range(0.0..=100.0),
            y: rng.gen_range(0.0..=100.0),
            size: rng.gen_range(1.0..=3.0),
            duration: rng.gen_range(8.0..=12.0),
            delay: id as f64 * ARC_STAGGER_SECS,
            color: draw_color(&mut rng),
        })
        .collect()
}

/// Particles for the rounded-rectangle loop around the lead-capture card.
pub fn generate_border(count: usize) -> Vec<Particle> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|id| Particle {
            id,
            x: rng.gen_range(0.0..=100.0),
            y: rng.gen_range(0.0..=100.0),
            size: rng.gen_range(1.0..=3.0),
            duration: rng.gen_range(10.0..=14.0),
            delay: id as f64 * BORDER_STAGGER_SECS,
            color: draw_color(&mut rng),
        })
        .collect()
}

#[function_component(StarField)]
pub fn star_field() -> Html {
    // Memoized on no inputs: re-renders must not reshuffle the sky.
    let stars = use_memo(|_| generate(FIELD_STAR_COUNT), ());

    html! {
        <div class="star-field" aria-hidden="true">
            { for stars.iter().map(|star| html! {
                <div
                    key={star.id}
                    class={classes!("field-star", star.color.css_class())}
                    style={format!(
                        "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
                        star.x, star.y, star.size, star.size, star.duration, star.delay
                    )}
                />
            }) }
            <style>
                {r#"
                .star-field {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    z-index: 0;
                    overflow: hidden;
                }

                .field-star {
                    position: absolute;
                    border-radius: 50%;
                    opacity: 0.1;
                    animation-name: star-drift;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }

                .star-green {
                    background: #2ca01c;
                }

                .star-navy {
                    background: #001f3f;
                }

                @keyframes star-drift {
                    0% {
                        transform: translateY(0);
                        opacity: 0.1;
                    }
                    50% {
                        opacity: 0.3;
                    }
                    100% {
                        transform: translateY(-1000px);
                        opacity: 0.1;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum ArcPosition {
    Top,
    Bottom,
}

#[derive(Properties, PartialEq)]
pub struct ArcStarsProps {
    #[prop_or(ArcPosition::Bottom)]
    pub position: ArcPosition,
}

#[function_component(ArcStars)]
pub fn arc_stars(props: &ArcStarsProps) -> Html {
    let stars = use_memo(|_| generate_arc(ARC_STAR_COUNT), ());

    let placement = match props.position {
        ArcPosition::Top => "arc-stars-top",
        ArcPosition::Bottom => "arc-stars-bottom",
    };

    html! {
        <div class={classes!("arc-stars", placement)} aria-hidden="true">
            { for stars.iter().map(|star| html! {
                <div
                    key={star.id}
                    class={classes!("arc-star", star.color.css_class())}
                    style={format!(
                        "animation-duration: {:.2}s; animation-delay: {:.2}s;",
                        star.duration, star.delay
                    )}
                />
            }) }
            <style>
                {r#"
                .arc-stars {
                    position: absolute;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 150%;
                    aspect-ratio: 2 / 1;
                    pointer-events: none;
                    overflow: hidden;
                    z-index: 15;
                }

                .arc-stars-bottom {
                    bottom: 0;
                }

                .arc-stars-top {
                    top: 0;
                    transform: translateX(-50%) rotate(180deg);
                }

                .arc-star {
                    position: absolute;
                    width: 4px;
                    height: 4px;
                    border-radius: 50%;
                    opacity: 0;
                    box-shadow: 0 0 8px rgba(0, 31, 63, 0.5);
                    offset-path: ellipse(50% 100% at 50% 100%);
                    offset-rotate: auto;
                    animation-name: arc-travel;
                    animation-timing-function: ease-in-out;
                    animation-iteration-count: infinite;
                }

                @keyframes arc-travel {
                    0% {
                        offset-distance: 0%;
                        opacity: 0;
                    }
                    33% {
                        opacity: 1;
                    }
                    66% {
                        opacity: 1;
                    }
                    100% {
                        offset-distance: 100%;
                        opacity: 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(BorderStars)]
pub fn border_stars() -> Html {
    let stars = use_memo(|_| generate_border(BORDER_STAR_COUNT), ());

    html! {
        <div class="border-stars" aria-hidden="true">
            { for stars.iter().map(|star| html! {
                <div
                    key={star.id}
                    class={classes!("border-star", star.color.css_class())}
                    style={format!(
                        "animation-duration: {:.2}s; animation-delay: {:.2}s;",
                        star.duration, star.delay
                    )}
                />
            }) }
            <style>
                {r#"
                .border-stars {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    overflow: visible;
                    z-index: 5;
                }

                .border-star {
                    position: absolute;
                    width: 4px;
                    height: 4px;
                    border-radius: 50%;
                    opacity: 0;
                    box-shadow: 0 0 8px rgba(44, 160, 28, 0.5);
                    offset-path: inset(0% round 24px);
                    offset-rotate: auto;
                    animation-name: border-travel;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }

                @keyframes border-travel {
                    0% {
                        offset-distance: 0%;
                        opacity: 0;
                    }
                    33% {
                        opacity: 1;
                    }
                    66% {
                        opacity: 1;
                    }
                    100% {
                        offset-distance: 100%;
                        opacity: 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_counts_and_ranges_hold() {
        for count in [0usize, 1, FIELD_STAR_COUNT] {
            let stars = generate(count);
            assert_eq!(stars.len(), count);
            for (i, star) in stars.iter().enumerate() {
                assert_eq!(star.id, i);
                assert!((0.0..=100.0).contains(&star.x));
                assert!((0.0..=100.0).contains(&star.y));
                assert!((1.0..=3.0).contains(&star.size));
                assert!((10.0..=30.0).contains(&star.duration));
                assert!((0.0..=10.0).contains(&star.delay));
            }
        }
    }

    #[test]
    fn successive_fields_differ() {
        // Unseeded draws: two 50-particle skies colliding would need
        // hundreds of identical f64 draws in a row.
        let first = generate(FIELD_STAR_COUNT);
        let second = generate(FIELD_STAR_COUNT);
        assert_ne!(first, second);
    }

    #[test]
    fn arc_delays_stagger_by_index() {
        let stars = generate_arc(ARC_STAR_COUNT);
        assert_eq!(stars.len(), ARC_STAR_COUNT);
        for (i, star) in stars.iter().enumerate() {
            assert_eq!(star.delay, i as f64 * ARC_STAGGER_SECS);
            assert!((8.0..=12.0).contains(&star.duration));
        }
    }

    #[test]
    fn border_delays_stagger_by_index() {
        let stars = generate_border(BORDER_STAR_COUNT);
        assert_eq!(stars.len(), BORDER_STAR_COUNT);
        for (i, star) in stars.iter().enumerate() {
            assert_eq!(star.delay, i as f64 * BORDER_STAGGER_SECS);
            assert!((10.0..=14.0).contains(&star.duration));
        }
    }
}
