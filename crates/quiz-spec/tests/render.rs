use quiz_spec::{
    AnswerRecord, default_quiz,
    render::{RenderStatus, build_render_payload, render_json_ui, render_text},
};

#[test]
fn render_text_includes_next_question() {
    let spec = default_quiz().expect("bundled quiz");
    let payload = build_render_payload(&spec, &AnswerRecord::new());

    assert_eq!(payload.status, RenderStatus::NeedInput);
    assert_eq!(payload.next_question_id.as_deref(), Some("goal"));

    let text = render_text(&payload);
    assert!(text.contains("Next question: goal"));
    assert!(text.contains("¿Qué te gustaría mejorar o trabajar en este momento?"));
    assert!(text.contains("1. Rejuvenecer mi piel (líneas, manchas, textura)"));
}

#[test]
fn render_json_ui_exposes_structure() {
    let spec = default_quiz().expect("bundled quiz");
    let answers = AnswerRecord::from([("goal", "Bienestar hormonal y salud integral")]);
    let payload = build_render_payload(&spec, &answers);

    let ui = render_json_ui(&payload);
    assert_eq!(ui["quiz_id"], "blum-intake");
    assert_eq!(ui["status"], "need_input");
    assert_eq!(ui["next_question_id"], "area");
    assert_eq!(ui["progress"]["answered"], 1);
    assert_eq!(ui["progress"]["total"], 8);

    let questions = ui["questions"].as_array().expect("questions array");
    assert_eq!(questions.len(), 8);
    let goal = questions
        .iter()
        .find(|question| question["id"] == "goal")
        .expect("goal entry");
    assert_eq!(goal["type"], "choice");
    assert_eq!(goal["current_value"], "Bienestar hormonal y salud integral");
    assert_eq!(goal["options"].as_array().expect("options").len(), 7);

    let name = questions
        .iter()
        .find(|question| question["id"] == "name")
        .expect("name entry");
    assert_eq!(name["type"], "text");
    assert!(name.get("options").is_none());
}

#[test]
fn fully_answered_record_renders_complete() {
    let spec = default_quiz().expect("bundled quiz");
    let mut answers = AnswerRecord::new();
    for question in &spec.questions {
        let value = question
            .options
            .as_ref()
            .and_then(|options| options.first().cloned())
            .unwrap_or_else(|| "dato".to_string());
        answers.set(question.id.as_str(), value);
    }

    let payload = build_render_payload(&spec, &answers);
    assert_eq!(payload.status, RenderStatus::Complete);
    assert!(payload.next_question_id.is_none());
    assert_eq!(payload.progress.answered, payload.progress.total);

    let text = render_text(&payload);
    assert!(text.contains("All questions are answered."));
}

#[test]
fn payload_embeds_answer_schema() {
    let spec = default_quiz().expect("bundled quiz");
    let payload = build_render_payload(&spec, &AnswerRecord::new());
    let required = payload.schema["required"].as_array().expect("required");
    assert_eq!(required.len(), 8);
    assert!(
        payload.schema["properties"]["preference"]["enum"]
            .as_array()
            .is_some()
    );
}
