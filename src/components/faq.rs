use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Single-open accordion rule: clicking the open panel closes it, clicking
/// any other panel moves the selection there.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    pub entries: Vec<FaqEntry>,
    /// Some page variants land with the first answer already expanded.
    #[prop_or_default]
    pub open_first: bool,
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    let open_first = props.open_first;
    let open_index = use_state(move || if open_first { Some(0) } else { None });

    html! {
        <section class="faq-section">
            <h2>{"FAQs"}</h2>
            <div class="faq-list">
                { for props.entries.iter().enumerate().map(|(i, entry)| {
                    let is_open = *open_index == Some(i);
                    let onclick = {
                        let open_index = open_index.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            open_index.set(toggle(*open_index, i));
                        })
                    };
                    html! {
                        <div class={classes!("faq-item", is_open.then(|| "open"))}>
                            <button class="faq-question" {onclick}>
                                <span class="question-text">{entry.question}</span>
                                <span class="toggle-icon">{"⌄"}</span>
                            </button>
                            <div class="faq-answer">
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                .faq-section {
                    max-width: 768px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                    position: relative;
                    z-index: 20;
                }

                .faq-section h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 3rem;
                    color: #000;
                }

                .faq-item {
                    background: #f9fafb;
                    border: 1px solid #e5e7eb;
                    border-radius: 16px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    font-weight: 600;
                    color: #001f3f;
                    opacity: 0.9;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    transition: background 0.3s ease;
                }

                .faq-question:hover {
                    background: #f3f4f6;
                }

                .toggle-icon {
                    font-size: 1.25rem;
                    color: #001f3f;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #6b7280;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reclicking_open_panel_closes_it() {
        assert_eq!(toggle(Some(0), 0), None);
    }

    #[test]
    fn clicking_another_panel_moves_selection() {
        let open = toggle(Some(0), 0);
        let open = toggle(open, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle(open, 2), None);
    }

    #[test]
    fn double_toggle_round_trips() {
        assert_eq!(toggle(toggle(None, 1), 1), None);
        assert_eq!(toggle(toggle(Some(2), 2), 2), Some(2));
    }
}
