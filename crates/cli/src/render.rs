//! Plain-text rendering for terminal output.

use bible_protocol::{
    MeditateResponse, PerspectivesResponse, SearchResponse, TodayResponse, VerseView,
    VersesResponse,
};

const SEPARATOR_WIDTH: usize = 60;

fn separator() -> String {
    "─".repeat(SEPARATOR_WIDTH)
}

fn push_suggestions(lines: &mut Vec<String>, suggestions: &[VerseView]) {
    if suggestions.is_empty() {
        return;
    }
    lines.push("이런 본문을 찾으셨나요?".to_string());
    for verse in suggestions {
        lines.push(format!(" - {}: {}", verse.reference, verse.text));
    }
}

pub(crate) fn search(response: &SearchResponse) -> String {
    let Some(hit) = response.results.first() else {
        let mut lines = vec!["검색 결과가 없습니다.".to_string()];
        push_suggestions(&mut lines, &response.suggestions);
        return lines.join("\n");
    };

    let mut lines = vec![
        String::new(),
        separator(),
        "📖 본문".to_string(),
        hit.reference.clone(),
        hit.text.clone(),
        String::new(),
        separator(),
        "🧭 관점 제안".to_string(),
    ];
    for (index, perspective) in hit.perspectives.iter().enumerate() {
        lines.push(format!("{}) {}", index + 1, perspective.title));
        lines.extend(perspective.bullets.iter().map(|point| format!("   - {point}")));
    }
    lines.push(String::new());
    lines.push(separator());
    lines.push("📝 오늘의 묵상".to_string());
    lines.push(format!("요약: {}", hit.meditation.summary));
    lines.push("적용 질문:".to_string());
    lines.extend(
        hit.meditation
            .application_questions
            .iter()
            .map(|question| format!(" - {question}")),
    );
    lines.push("기도:".to_string());
    lines.push(format!(" - {}", hit.meditation.prayer));
    lines.push(String::new());
    lines.push("Tip: `bible today`로 오늘의 묵상을 바로 확인할 수 있습니다.".to_string());
    lines.join("\n")
}

pub(crate) fn today(response: &TodayResponse) -> String {
    let mut lines = vec![
        String::new(),
        separator(),
        format!("🗓️ {} 오늘의 묵상", response.date),
        format!("오늘의 말씀: {}", response.reference),
        format!("오늘의 요약: {}", response.summary),
        "오늘의 적용 질문:".to_string(),
    ];
    lines.extend(
        response
            .application_questions
            .iter()
            .map(|question| format!(" - {question}")),
    );
    lines.push("오늘의 기도:".to_string());
    lines.push(format!(" - {}", response.prayer));
    lines.join("\n")
}

pub(crate) fn meditate(response: &MeditateResponse) -> String {
    let Some(result) = &response.result else {
        let mut lines = vec!["묵상할 본문을 찾지 못했습니다.".to_string()];
        push_suggestions(&mut lines, &response.suggestions);
        return lines.join("\n");
    };

    let mut lines = vec![
        String::new(),
        separator(),
        "🧘 묵상 시작".to_string(),
        format!("본문: {}", result.reference),
        format!("요약: {}", result.summary),
        "묵상 안내:".to_string(),
    ];
    lines.extend(
        result
            .prompts
            .iter()
            .enumerate()
            .map(|(index, prompt)| format!("{}. {prompt}", index + 1)),
    );
    lines.join("\n")
}

pub(crate) fn verses(response: &VersesResponse) -> String {
    response
        .verses
        .iter()
        .map(|verse| format!("{}\n   {}", verse.reference, verse.text))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn perspectives(response: &PerspectivesResponse) -> String {
    let mut lines = Vec::new();
    for (index, perspective) in response.perspectives.iter().enumerate() {
        lines.push(format!("{}) {}", index + 1, perspective.title));
        lines.extend(perspective.bullets.iter().map(|point| format!("   - {point}")));
    }
    lines.join("\n")
}
