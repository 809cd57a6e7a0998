use ankibot_core::Page;

pub const MORE_HINT: &str = "Type /more to show more";
pub const NO_MORE: &str = "No more definitions found";
pub const EMPTY_DECK: &str = "You have to add some words to your deck first";
pub const DUPLICATE: &str = "Your deck already contains this word";
pub const INCORRECT_INPUT: &str = "Incorrect input";
pub const FAILURE: &str = "Something went wrong, please try again later";
pub const NO_WORD: &str = "Look up a word first";

pub const GREETING: &str = "Send me an English word and I will look it up in the dictionary.\n\
    Type /help for the list of commands";

pub const HELP: &str = "<word>                 look up a word\n\
    /more                  show more definitions\n\
    /add N                 add definition N to your deck\n\
    /all                   show your deck\n\
    /match <word> <text>   find a form of <word> in <text>\n\
    /quit                  leave";

/// Numbered entries separated by `***`, with a hint when more pages follow
pub fn page(page: &Page<'_>) -> String {
    if page.is_empty() {
        return NO_MORE.to_string();
    }

    let mut text = page
        .numbered()
        .map(|(n, entry)| format!("{n}. {entry}"))
        .collect::<Vec<_>>()
        .join("\n***\n");

    if page.has_more {
        text.push_str("\n\n");
        text.push_str(MORE_HINT);
    }

    text
}

pub fn not_found(word: &str) -> String {
    format!("{word} not found.")
}

pub fn added(definition: &str) -> String {
    format!("Adding definition *{definition}* to your deck")
}
