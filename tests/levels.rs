use slogovik::text::{full_text_level, hyphenate_word, split_hyphenated};
use slogovik::{process_text, split_syllables, TextLevels};

fn assert_levels(levels: &TextLevels, syllables: &[&str], hyphenated: &[&str], full_text: &[&str]) {
    assert_eq!(levels.syllables.level_name, "Слоги");
    assert_eq!(levels.hyphenated.level_name, "Слова по слогам");
    assert_eq!(levels.full_text.level_name, "Полный текст");
    assert_eq!(levels.syllables.words, syllables);
    assert_eq!(levels.hyphenated.words, hyphenated);
    assert_eq!(levels.full_text.words, full_text);
}

#[test]
fn test_short_sentence() {
    assert_levels(
        &process_text("Мама мыла раму."),
        &["ма", "ма", "мы", "ла", "ра", "му"],
        &["ма-ма", "мы-ла", "ра-му"],
        &["Мама", "мыла", "раму", "Мама мыла раму."],
    );
}

#[test]
fn test_exception_word_stays_whole() {
    assert_levels(
        &process_text("Саша ест кашу."),
        &["са", "ша", "ест", "ка", "шу"],
        &["са-ша", "ест", "ка-шу"],
        &["Саша", "ест", "кашу", "Саша ест кашу."],
    );
}

#[test]
fn test_single_syllable_word() {
    assert_levels(
        &process_text("На реке рыбаки."),
        &["на", "ре", "ке", "ры", "ба", "ки"],
        &["на", "ре-ке", "ры-ба-ки"],
        &["На", "реке", "рыбаки", "На реке рыбаки."],
    );
}

#[test]
fn test_indented_multiline_text() {
    let text = "Мама готовит суп.
        Папа читает книгу.
        Кошка пьёт молоко.
        Дети играют в парке.
        Мы любим лето.";

    #[rustfmt::skip]
    let syllables = [
        "ма", "ма", "го", "то", "вит", "суп",
        "па", "па", "чи", "та", "ет", "кни", "гу",
        "кош", "ка", "пьёт", "мо", "ло", "ко",
        "де", "ти", "иг", "ра", "ют", "в", "пар", "ке",
        "мы", "лю", "бим", "ле", "то",
    ];
    #[rustfmt::skip]
    let hyphenated = [
        "ма-ма", "го-то-вит", "суп",
        "па-па", "чи-та-ет", "кни-гу",
        "кош-ка", "пьёт", "мо-ло-ко",
        "де-ти", "иг-ра-ют", "в", "пар-ке",
        "мы", "лю-бим", "ле-то",
    ];
    #[rustfmt::skip]
    let full_text = [
        "Мама", "готовит", "суп",
        "Папа", "читает", "книгу",
        "Кошка", "пьёт", "молоко",
        "Дети", "играют", "в", "парке",
        "Мы", "любим", "лето",
        "Мама готовит суп. Папа читает книгу. Кошка пьёт молоко. Дети играют в парке. Мы любим лето.",
    ];

    assert_levels(&process_text(text), &syllables, &hyphenated, &full_text);
}

#[test]
fn test_vowel_clusters_and_exceptions() {
    let text = "На улице дети играют.
        Даниил играет в мяч.
        Наоми едет на велосипеде.
        Олег играет машинками.
        Все веселятся и смеются.";

    #[rustfmt::skip]
    let syllables = [
        "на", "у", "ли", "це", "де", "ти", "иг", "ра", "ют",
        "да", "ни", "ил", "иг", "ра", "ет", "в", "мяч",
        "на", "о", "ми", "е", "дет", "на", "ве", "ло", "си", "пе", "де",
        "о", "лег", "иг", "ра", "ет", "ма", "шин", "ка", "ми",
        "все", "ве", "се", "лят", "ся", "и", "сме", "ют", "ся",
    ];
    #[rustfmt::skip]
    let hyphenated = [
        "на", "у-ли-це", "де-ти", "иг-ра-ют",
        "да-ни-ил", "иг-ра-ет", "в", "мяч",
        "на-о-ми", "е-дет", "на", "ве-ло-си-пе-де",
        "о-лег", "иг-ра-ет", "ма-шин-ка-ми",
        "все", "ве-се-лят-ся", "и", "сме-ют-ся",
    ];
    #[rustfmt::skip]
    let full_text = [
        "На", "улице", "дети", "играют",
        "Даниил", "играет", "в", "мяч",
        "Наоми", "едет", "на", "велосипеде",
        "Олег", "играет", "машинками",
        "Все", "веселятся", "и", "смеются",
        "На улице дети играют. Даниил играет в мяч. Наоми едет на велосипеде. Олег играет машинками. Все веселятся и смеются.",
    ];

    assert_levels(&process_text(text), &syllables, &hyphenated, &full_text);
}

#[test]
fn test_soft_sign_and_flush_lines() {
    let text = "Сегодня хорошая погода.
Я люблю кушать мороженое.
Мама любит папу.
Папа любит маму.
Мы дружная семья.";

    #[rustfmt::skip]
    let syllables = [
        "се", "год", "ня", "хо", "ро", "ша", "я", "по", "го", "да",
        "я", "люб", "лю", "ку", "шать", "мо", "ро", "же", "но", "е",
        "ма", "ма", "лю", "бит", "па", "пу",
        "па", "па", "лю", "бит", "ма", "му",
        "мы", "друж", "на", "я", "семь", "я",
    ];
    #[rustfmt::skip]
    let hyphenated = [
        "се-год-ня", "хо-ро-ша-я", "по-го-да",
        "я", "люб-лю", "ку-шать", "мо-ро-же-но-е",
        "ма-ма", "лю-бит", "па-пу",
        "па-па", "лю-бит", "ма-му",
        "мы", "друж-на-я", "семь-я",
    ];
    #[rustfmt::skip]
    let full_text = [
        "Сегодня", "хорошая", "погода",
        "Я", "люблю", "кушать", "мороженое",
        "Мама", "любит", "папу",
        "Папа", "любит", "маму",
        "Мы", "дружная", "семья",
        "Сегодня хорошая погода. Я люблю кушать мороженое. Мама любит папу. Папа любит маму. Мы дружная семья.",
    ];

    assert_levels(&process_text(text), &syllables, &hyphenated, &full_text);
}

#[test]
fn test_full_text_level() {
    let level = full_text_level("Привет, мир!");
    assert_eq!(level.level_name, "Полный текст");
    assert_eq!(level.words, ["Привет", "мир", "Привет, мир!"]);
}

#[test]
fn test_hyphenate_word() {
    assert_eq!(hyphenate_word("семья"), "семь-я");
    assert_eq!(hyphenate_word("кот"), "кот");
    assert_eq!(hyphenate_word(""), "");
    assert_eq!(hyphenate_word("папа"), "па-па");
    assert_eq!(hyphenate_word("веселятся"), "ве-се-лят-ся");
    assert_eq!(hyphenate_word("смеются"), "сме-ют-ся");
}

#[test]
fn test_split_hyphenated() {
    assert_eq!(split_hyphenated("семь-я"), ["семь", "я"]);
    assert_eq!(split_hyphenated("кот"), ["кот"]);
    assert_eq!(split_hyphenated(""), [""]);
}

#[test]
fn test_syllables_partition_the_word() {
    let words = [
        "семья", "мороженое", "здравствуйте", "подъезд", "аэроплан", "велосипеде", "объявление",
        "пятнадцатилетний", "ёж", "щука", "интересный",
    ];
    for word in words {
        assert_eq!(split_syllables(word).concat(), word, "{word}");
    }
}

#[test]
fn test_words_with_at_most_one_vowel_stay_whole() {
    for word in ["кот", "в", "сверх", "брр", "мяч", "хлеб"] {
        assert_eq!(split_syllables(word), [word]);
    }
}

#[test]
fn test_hyphenated_level_matches_syllables() {
    let text = "Сегодня хорошая погода. Кошка пьёт молоко, а дети играют в парке!";
    let levels = process_text(text);
    let rejoined: Vec<String> = levels
        .hyphenated
        .words
        .iter()
        .flat_map(|word| word.split('-').map(str::to_string))
        .collect();
    assert_eq!(rejoined, levels.syllables.words);
}

#[test]
fn test_levels_serialize_with_numbered_keys() {
    let json = serde_json::to_value(process_text("кот")).unwrap();
    assert_eq!(json["1"]["levelName"], "Слоги");
    assert_eq!(json["2"]["words"][0], "кот");
    assert_eq!(json["3"]["words"][1], "кот");
}
