//! Closed word classes and morphological exception tables for English.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "all", "both", "another", "such", "my", "your", "his", "her", "its",
    "our", "their", "whose", "much", "many", "few", "several", "enough", "other",
];

pub const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves", "mine",
    "yours", "hers", "ours", "theirs", "who", "whom", "what", "which", "someone", "anyone",
    "everyone", "nobody", "somebody", "anybody", "everybody", "something", "anything",
    "everything", "nothing", "one",
];

/// Pronouns that take a third person or plain verb right after them
pub const SUBJECT_PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "who", "which", "that", "what", "someone",
    "anyone", "everyone", "nobody", "somebody", "anybody", "everybody", "something", "anything",
    "everything", "nothing",
];

pub const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "from", "up", "down", "out",
    "off", "over", "under", "around", "among", "without", "within", "along", "across",
    "behind", "beyond", "near", "since", "until", "upon", "toward", "towards", "onto", "via",
    "per", "despite", "throughout", "beside", "besides", "inside", "outside", "underneath",
];

pub const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while", "if",
    "unless", "whereas", "whether", "than", "as", "when", "where", "once",
];

pub const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ca", "wo",
    "'ll", "'d",
];

pub const ADVERBS: &[&str] = &[
    "not", "n't", "very", "too", "also", "just", "only", "again", "already", "always", "never",
    "often", "sometimes", "here", "there", "now", "then", "still", "even", "soon", "ever",
    "quite", "rather", "almost", "really", "away", "back", "together", "yesterday", "today",
    "tomorrow", "perhaps", "maybe", "however", "therefore", "instead", "anyway", "else", "how",
    "why", "seldom", "rarely", "once", "twice", "ago", "later", "afterwards", "nowhere",
    "somewhere", "anywhere", "everywhere", "indeed", "thus", "hence", "less", "least", "more",
    "most",
];

pub const INTERJECTIONS: &[&str] = &[
    "oh", "ah", "hello", "hi", "hey", "yes", "wow", "ouch", "oops", "hmm", "alas", "bye",
    "please", "thanks",
];

/// Inflected forms of "be", "have" and "do"; always verbs
pub const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "'m", "'re", "have", "has", "had",
    "having", "'ve", "do", "does", "did", "done", "doing",
];

/// Irregular verb forms and their base form
pub const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("being", "be"), ("'m", "be"), ("'re", "be"), ("has", "have"), ("had", "have"),
    ("having", "have"), ("'ve", "have"), ("does", "do"), ("did", "do"), ("done", "do"),
    ("doing", "do"), ("goes", "go"), ("went", "go"), ("gone", "go"),
    ("arose", "arise"), ("arisen", "arise"), ("awoke", "awake"), ("awoken", "awake"),
    ("bore", "bear"), ("borne", "bear"), ("beaten", "beat"), ("became", "become"),
    ("began", "begin"), ("begun", "begin"), ("bent", "bend"), ("bit", "bite"),
    ("bitten", "bite"), ("bled", "bleed"), ("blew", "blow"), ("blown", "blow"),
    ("broke", "break"), ("broken", "break"), ("bred", "breed"), ("brought", "bring"),
    ("built", "build"), ("burnt", "burn"), ("bought", "buy"), ("caught", "catch"),
    ("chose", "choose"), ("chosen", "choose"), ("came", "come"), ("crept", "creep"),
    ("dealt", "deal"), ("dug", "dig"), ("drew", "draw"), ("drawn", "draw"),
    ("dreamt", "dream"), ("drank", "drink"), ("drunk", "drink"), ("drove", "drive"),
    ("driven", "drive"), ("ate", "eat"), ("eaten", "eat"), ("fell", "fall"),
    ("fallen", "fall"), ("fed", "feed"), ("felt", "feel"), ("fought", "fight"),
    ("found", "find"), ("fled", "flee"), ("flew", "fly"), ("flown", "fly"),
    ("forbade", "forbid"), ("forbidden", "forbid"), ("forgot", "forget"),
    ("forgotten", "forget"), ("forgave", "forgive"), ("forgiven", "forgive"),
    ("froze", "freeze"), ("frozen", "freeze"), ("got", "get"), ("gotten", "get"),
    ("gave", "give"), ("given", "give"), ("grew", "grow"), ("grown", "grow"),
    ("hung", "hang"), ("heard", "hear"), ("hid", "hide"), ("hidden", "hide"),
    ("held", "hold"), ("kept", "keep"), ("knelt", "kneel"), ("knew", "know"),
    ("known", "know"), ("laid", "lay"), ("led", "lead"), ("leant", "lean"),
    ("leapt", "leap"), ("learnt", "learn"), ("left", "leave"), ("lent", "lend"),
    ("lain", "lie"), ("lit", "light"), ("lost", "lose"), ("made", "make"),
    ("meant", "mean"), ("met", "meet"), ("paid", "pay"), ("rode", "ride"),
    ("ridden", "ride"), ("rang", "ring"), ("rung", "ring"), ("rose", "rise"),
    ("risen", "rise"), ("ran", "run"), ("said", "say"), ("saw", "see"), ("seen", "see"),
    ("sought", "seek"), ("sold", "sell"), ("sent", "send"), ("shook", "shake"),
    ("shaken", "shake"), ("shone", "shine"), ("shot", "shoot"), ("shown", "show"),
    ("shrank", "shrink"), ("shrunk", "shrink"), ("sang", "sing"), ("sung", "sing"),
    ("sank", "sink"), ("sunk", "sink"), ("sat", "sit"), ("slept", "sleep"), ("slid", "slide"),
    ("spoke", "speak"), ("spoken", "speak"), ("sped", "speed"), ("spent", "spend"),
    ("spun", "spin"), ("spat", "spit"), ("sprang", "spring"), ("sprung", "spring"),
    ("stood", "stand"), ("stole", "steal"), ("stolen", "steal"), ("stuck", "stick"),
    ("stung", "sting"), ("stank", "stink"), ("struck", "strike"), ("strove", "strive"),
    ("swore", "swear"), ("sworn", "swear"), ("swept", "sweep"), ("swam", "swim"),
    ("swum", "swim"), ("swung", "swing"), ("took", "take"), ("taken", "take"),
    ("taught", "teach"), ("tore", "tear"), ("torn", "tear"), ("told", "tell"),
    ("thought", "think"), ("threw", "throw"), ("thrown", "throw"),
    ("understood", "understand"), ("woke", "wake"), ("woken", "wake"), ("wore", "wear"),
    ("worn", "wear"), ("wove", "weave"), ("woven", "weave"), ("wept", "weep"), ("won", "win"),
    ("wrote", "write"), ("written", "write"), ("withdrew", "withdraw"),
    ("withdrawn", "withdraw"), ("overcame", "overcome"), ("undertook", "undertake"),
    ("undertaken", "undertake"), ("mistook", "mistake"), ("mistaken", "mistake"),
    ("forsook", "forsake"), ("forsaken", "forsake"), ("foresaw", "foresee"),
    ("foreseen", "foresee"), ("misunderstood", "misunderstand"), ("upheld", "uphold"),
    ("withheld", "withhold"), ("lying", "lie"), ("dying", "die"), ("tying", "tie"),
];

/// Base forms of common English verbs, used to validate suffix stripping
pub const BASE_VERBS: &[&str] = &[
    "accept", "achieve", "act", "add", "admire", "admit", "advise", "afford", "agree", "allow",
    "announce", "annoy", "answer", "apologize", "appear", "apply", "appreciate", "approve",
    "argue", "arise", "arrange", "arrest", "arrive", "ask", "attach", "attack", "attempt",
    "attend", "attract", "avoid", "awake", "bake", "bathe", "be", "bear", "beat", "become",
    "beg", "begin", "behave", "believe", "belong", "bend", "bet", "bite", "bleed", "bless",
    "blind", "blink", "blow", "boast", "boil", "bolt", "book", "bore", "borrow", "bounce",
    "bow", "box", "brake", "branch", "break", "breathe", "breed", "bring", "broadcast",
    "build", "burn", "burst", "bury", "buy", "buzz", "calculate", "call", "carry", "carve",
    "cast", "catch", "cause", "challenge", "change", "charge", "chase", "cheat", "check",
    "cheer", "chew", "choke", "choose", "chop", "claim", "clap", "clean", "clear", "climb",
    "cling", "close", "collect", "comb", "come", "command", "complain", "complete", "concern",
    "confess", "confuse", "connect", "consider", "consist", "contain", "continue", "copy",
    "correct", "cost", "cough", "count", "cover", "crack", "crash", "crawl", "create",
    "creep", "cross", "crush", "cry", "cure", "curl", "curve", "cut", "cycle", "damage",
    "dance", "dare", "deal", "decay", "deceive", "decide", "decorate", "delay", "delight",
    "deliver", "depend", "describe", "desert", "deserve", "design", "destroy", "detect",
    "develop", "die", "dig", "disagree", "disappear", "discover", "dislike", "divide", "do",
    "double", "doubt", "drag", "drain", "draw", "dream", "dress", "drink", "drip", "drive",
    "drop", "drown", "dry", "dust", "earn", "eat", "educate", "embarrass", "employ", "empty",
    "encourage", "end", "enjoy", "enter", "entertain", "escape", "examine", "excite",
    "excuse", "exercise", "exist", "expand", "expect", "explain", "explode", "extend", "face",
    "fade", "fail", "fall", "fancy", "fasten", "fax", "fear", "feed", "feel", "fence",
    "fetch", "fight", "file", "fill", "film", "find", "fire", "fit", "fix", "flash", "flee",
    "float", "flood", "flow", "flower", "fly", "fold", "follow", "fool", "forbid", "force",
    "forecast", "foresee", "forget", "forgive", "form", "forsake", "found", "frame",
    "freeze", "frighten", "fry", "gather", "gaze", "get", "give", "glow", "glue", "go",
    "grab", "grate", "grease", "greet", "grin", "grind", "grip", "groan", "grow", "guarantee",
    "guard", "guess", "guide", "hammer", "hand", "handle", "hang", "happen", "harm", "hate",
    "haunt", "have", "head", "heal", "heap", "hear", "heat", "help", "hide", "hit", "hold",
    "hook", "hop", "hope", "hover", "hug", "hum", "hunt", "hurry", "hurt", "identify",
    "ignore", "imagine", "impress", "improve", "include", "increase", "influence", "inform",
    "inject", "injure", "instruct", "intend", "interest", "interfere", "interrupt",
    "introduce", "invent", "invite", "irritate", "itch", "jail", "jam", "jog", "join", "joke",
    "judge", "juggle", "jump", "keep", "kick", "kill", "kiss", "kneel", "knit", "knock",
    "knot", "know", "label", "land", "last", "laugh", "launch", "lay", "lead", "lean", "leap",
    "learn", "leave", "lend", "let", "lick", "lie", "lift", "light", "like", "limp", "list",
    "listen", "live", "load", "lock", "long", "look", "lose", "love", "make", "manage",
    "march", "mark", "marry", "match", "mate", "matter", "mean", "measure", "meet", "melt",
    "memorize", "mend", "milk", "mine", "miss", "mistake", "misunderstand", "mix", "moan",
    "move", "muddle", "mug", "multiply", "murder", "nail", "name", "need", "nest", "nod",
    "note", "notice", "number", "obey", "object", "observe", "obtain", "occur", "offend",
    "offer", "open", "order", "overcome", "overflow", "owe", "own", "pack", "paddle", "paint",
    "park", "part", "pass", "paste", "pat", "pause", "pay", "peel", "perform", "permit",
    "phone", "pick", "pinch", "place", "plan", "plant", "play", "please", "plug", "point",
    "poke", "polish", "possess", "post", "pour", "practise", "practice", "pray", "preach",
    "precede", "prefer", "prepare", "present", "preserve", "press", "pretend", "prevent",
    "prick", "print", "produce", "program", "promise", "protect", "provide", "pull", "pump",
    "punch", "punish", "push", "put", "question", "queue", "quit", "race", "radiate", "rain",
    "raise", "reach", "read", "realize", "receive", "recognize", "record", "reduce",
    "reflect", "refuse", "regret", "reign", "reject", "rejoice", "relax", "release", "rely",
    "remain", "remember", "remind", "remove", "repair", "repeat", "replace", "reply",
    "report", "reproduce", "request", "rescue", "retire", "return", "rhyme", "ride", "ring",
    "rinse", "rise", "risk", "rob", "rock", "roll", "rot", "rub", "ruin", "rule", "run",
    "rush", "sack", "sail", "satisfy", "save", "saw", "say", "scare", "scatter", "scold",
    "scorch", "scrape", "scratch", "scream", "screw", "scribble", "scrub", "seal", "search",
    "see", "seek", "seem", "sell", "send", "separate", "serve", "set", "settle", "sew",
    "shade", "shake", "share", "shave", "shelter", "shine", "shiver", "shock", "shoot",
    "shop", "shout", "show", "shrink", "shrug", "shut", "sigh", "sign", "signal", "sin",
    "sing", "sink", "sip", "sit", "ski", "skip", "slap", "sleep", "slide", "slip", "slow",
    "smash", "smell", "smile", "smoke", "snatch", "sneeze", "sniff", "snore", "snow", "soak",
    "solve", "soothe", "sound", "spare", "spark", "sparkle", "speak", "speed", "spell",
    "spend", "spill", "spin", "spit", "split", "spoil", "spot", "spray", "spread", "spring",
    "sprout", "squash", "squeak", "squeal", "squeeze", "stain", "stamp", "stand", "stare",
    "start", "stay", "steal", "steer", "step", "stick", "sting", "stink", "stir", "stitch",
    "stop", "store", "strap", "strengthen", "stretch", "strike", "strip", "strive", "stroke",
    "study", "stuff", "subtract", "succeed", "suck", "suffer", "suggest", "suit", "supply",
    "support", "suppose", "surprise", "surround", "suspect", "suspend", "swear", "sweep",
    "swim", "swing", "switch", "take", "talk", "tame", "tap", "taste", "teach", "tear",
    "tease", "telephone", "tell", "tempt", "terrify", "test", "thank", "thaw", "think",
    "throw", "tick", "tickle", "tie", "time", "tip", "tire", "touch", "tour", "tow", "trace",
    "trade", "train", "transport", "trap", "travel", "treat", "tremble", "trick", "trip",
    "trot", "trouble", "trust", "try", "tug", "tumble", "turn", "twist", "type", "undertake",
    "understand", "undress", "unfasten", "unite", "unlock", "unpack", "untidy", "uphold",
    "use", "vanish", "visit", "wail", "wait", "wake", "walk", "wander", "want", "warm",
    "warn", "wash", "waste", "watch", "water", "wave", "wear", "weave", "weep", "weigh",
    "welcome", "whip", "whirl", "whisper", "whistle", "win", "wind", "wink", "wipe", "wish",
    "withdraw", "withhold", "wobble", "wonder", "work", "worry", "wrap", "wreck", "wrestle",
    "wriggle", "write", "yawn", "yell", "zip", "zoom",
];

/// Irregular plurals and their singular
pub const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"), ("women", "woman"), ("children", "child"), ("feet", "foot"),
    ("teeth", "tooth"), ("geese", "goose"), ("mice", "mouse"), ("lice", "louse"),
    ("oxen", "ox"), ("dice", "die"), ("wives", "wife"), ("knives", "knife"), ("lives", "life"),
    ("leaves", "leaf"), ("halves", "half"), ("wolves", "wolf"), ("shelves", "shelf"),
    ("thieves", "thief"), ("loaves", "loaf"), ("selves", "self"), ("calves", "calf"),
    ("elves", "elf"), ("scarves", "scarf"), ("data", "datum"), ("criteria", "criterion"),
    ("phenomena", "phenomenon"), ("analyses", "analysis"), ("crises", "crisis"),
    ("theses", "thesis"), ("hypotheses", "hypothesis"), ("cacti", "cactus"),
    ("fungi", "fungus"), ("nuclei", "nucleus"), ("indices", "index"),
    ("appendices", "appendix"), ("matrices", "matrix"), ("potatoes", "potato"),
    ("tomatoes", "tomato"), ("heroes", "hero"), ("echoes", "echo"), ("vetoes", "veto"),
    ("torpedoes", "torpedo"), ("volcanoes", "volcano"),
];

/// Singular nouns whose plural ends in "ies" but keep the "ie"
pub const IE_NOUNS: &[&str] = &[
    "movie", "cookie", "zombie", "calorie", "brownie", "pie", "tie", "lie", "rookie",
    "hippie", "selfie", "genie", "prairie", "goalie", "smoothie",
];

/// Words ending in "s" that are not plurals
pub const INVARIANT_NOUNS: &[&str] = &[
    "news", "series", "species", "means", "physics", "mathematics", "economics", "politics",
    "athletics", "ethics", "lens", "gas", "bus", "plus", "bias", "chaos", "canvas", "atlas",
    "always", "perhaps", "towards", "afterwards", "sometimes", "whereas", "besides", "yes",
];

static VERB_EXCEPTION_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| VERB_EXCEPTIONS.iter().copied().collect());

static NOUN_EXCEPTION_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| NOUN_EXCEPTIONS.iter().copied().collect());

static BASE_VERB_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    BASE_VERBS
        .iter()
        .copied()
        .chain(VERB_EXCEPTIONS.iter().map(|(_, base)| *base))
        .collect()
});

static CLOSED_CLASS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        DETERMINERS,
        PRONOUNS,
        PREPOSITIONS,
        CONJUNCTIONS,
        MODALS,
        ADVERBS,
        INTERJECTIONS,
        INVARIANT_NOUNS,
    ]
    .into_iter()
    .flatten()
    .copied()
    .collect()
});

fn contains(list: &[&str], word: &str) -> bool {
    list.contains(&word)
}

pub fn irregular_verb(word: &str) -> Option<&'static str> {
    VERB_EXCEPTION_MAP.get(word).copied()
}

pub fn irregular_noun(word: &str) -> Option<&'static str> {
    NOUN_EXCEPTION_MAP.get(word).copied()
}

pub fn is_base_verb(word: &str) -> bool {
    BASE_VERB_SET.contains(word)
}

/// Function words and invariant forms that never inflect
pub fn is_closed_class(word: &str) -> bool {
    CLOSED_CLASS.contains(word)
}

pub fn is_determiner(word: &str) -> bool {
    contains(DETERMINERS, word)
}

pub fn is_pronoun(word: &str) -> bool {
    contains(PRONOUNS, word)
}

pub fn is_subject_pronoun(word: &str) -> bool {
    contains(SUBJECT_PRONOUNS, word)
}

pub fn is_preposition(word: &str) -> bool {
    contains(PREPOSITIONS, word)
}

pub fn is_conjunction(word: &str) -> bool {
    contains(CONJUNCTIONS, word)
}

pub fn is_modal(word: &str) -> bool {
    contains(MODALS, word)
}

pub fn is_adverb(word: &str) -> bool {
    contains(ADVERBS, word)
}

pub fn is_interjection(word: &str) -> bool {
    contains(INTERJECTIONS, word)
}

pub fn is_auxiliary(word: &str) -> bool {
    contains(AUXILIARIES, word)
}

pub fn is_ie_noun(word: &str) -> bool {
    contains(IE_NOUNS, word)
}
