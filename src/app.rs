use gloo::console::log;
use katachi_core::{Answer, OptionKey, Quiz, QUESTION_CATALOG};
use yew::prelude::*;

use crate::hint::HintModal;
use crate::view::{CellView, MatrixView};

#[function_component(App)]
pub(crate) fn app() -> Html {
    let quiz = use_state(|| Quiz::new(QUESTION_CATALOG));
    let question = *quiz.question();
    let answer = quiz.answer();

    let on_select = {
        let quiz = quiz.clone();
        Callback::from(move |key: OptionKey| {
            let mut next = (*quiz).clone();
            let correct = next.select_answer(key);
            log!(format!(
                "question {} answered {key}: {}",
                next.question().id,
                if correct { "correct" } else { "incorrect" }
            ));
            quiz.set(next);
        })
    };
    let on_previous = {
        let quiz = quiz.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*quiz).clone();
            if next.previous() {
                log!(format!("showing question {}", next.question().id));
            }
            quiz.set(next);
        })
    };
    let on_next = {
        let quiz = quiz.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*quiz).clone();
            if next.next() {
                log!(format!("showing question {}", next.question().id));
            }
            quiz.set(next);
        })
    };
    let on_hint = {
        let quiz = quiz.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*quiz).clone();
            next.show_hint();
            quiz.set(next);
        })
    };
    let on_hint_close = {
        let quiz = quiz.clone();
        Callback::from(move |_| {
            let mut next = (*quiz).clone();
            next.hide_hint();
            quiz.set(next);
        })
    };

    let matrix_class = match answer {
        Answer::Unanswered => "matrix-card",
        Answer::Answered { correct: true, .. } => "matrix-card matrix-card-correct",
        Answer::Answered { correct: false, .. } => "matrix-card matrix-card-incorrect",
    };
    let feedback = match answer {
        Answer::Unanswered => html! {},
        Answer::Answered { correct: true, .. } => {
            html! { <p class="feedback feedback-correct">{ "Correct!" }</p> }
        }
        Answer::Answered { correct: false, .. } => {
            html! { <p class="feedback feedback-incorrect">{ "Incorrect. Try again." }</p> }
        }
    };

    let options: Html = OptionKey::ALL
        .into_iter()
        .map(|key| {
            let selected = matches!(answer, Answer::Answered { key: picked, .. } if picked == key);
            let class = if selected {
                "option option-selected"
            } else {
                "option"
            };
            let onclick = {
                let on_select = on_select.clone();
                Callback::from(move |_: MouseEvent| on_select.emit(key))
            };
            html! {
                <button {class} {onclick}>
                    <span class="option-label">{ key.label() }</span>
                    <CellView cell={*question.option(key)} />
                </button>
            }
        })
        .collect();

    let previous_button = if quiz.has_previous() {
        html! { <button class="nav" onclick={on_previous}>{ "Previous" }</button> }
    } else {
        html! {}
    };
    let next_button = if quiz.has_next() {
        html! { <button class="nav" onclick={on_next}>{ "Next" }</button> }
    } else {
        html! {}
    };

    html! {
        <div class="quiz">
            <header class="quiz-header">
                <h1>{ format!("Exercise {}", question.id) }</h1>
                <button class="hint-button" onclick={on_hint}>{ "Hint" }</button>
            </header>
            <div class={matrix_class}>
                <MatrixView matrix={question.matrix} />
            </div>
            { feedback }
            <div class="options">
                { options }
            </div>
            <div class="quiz-nav">
                { previous_button }
                { next_button }
            </div>
            <HintModal
                text={AttrValue::Static(question.hint)}
                open={quiz.hint_open()}
                on_close={on_hint_close}
            />
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::App;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount() -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let root: HtmlElement = document
            .create_element("div")
            .unwrap()
            .dyn_into()
            .unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<App>::with_root(root.clone().into()).render();
        root
    }

    #[wasm_bindgen_test]
    async fn renders_the_first_exercise() {
        let root = mount();
        TimeoutFuture::new(50).await;
        let text = root.text_content().unwrap_or_default();
        assert!(text.contains("Exercise 1"), "{text}");
        assert!(text.contains("Hint"), "{text}");
    }

    #[wasm_bindgen_test]
    async fn shows_six_options_and_a_blank_slot() {
        let root = mount();
        TimeoutFuture::new(50).await;
        let options = root.query_selector_all(".option").unwrap();
        assert_eq!(options.length(), 6);
        let blank = root.query_selector(".cell-blank").unwrap();
        assert!(blank.is_some());
    }
}
