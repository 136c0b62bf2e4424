use super::roller::Roller;

const ADJECTIVES: &[&str] = &[
    "admiring", "adoring", "affectionate", "agitated", "amazing", "angry", "awesome", "blissful",
    "bold", "boring", "brave", "clever", "cocky", "compassionate", "competent", "confident",
    "cranky", "dazzling", "determined", "distracted", "dreamy", "eager", "ecstatic", "elastic",
    "elegant", "eloquent", "epic", "fervent", "festive", "flamboyant", "focused", "friendly",
    "frosty", "gallant", "gifted", "goofy", "gracious", "happy", "hardcore", "heuristic",
    "hopeful", "hungry", "infallible", "inspiring", "jolly", "jovial", "keen", "kind", "laughing",
    "loving", "lucid", "magical", "modest", "musing", "mystifying", "naughty", "nervous", "nifty",
    "nostalgic", "objective", "optimistic", "peaceful", "pedantic", "pensive", "practical",
    "priceless", "quirky", "quizzical", "relaxed", "reverent", "romantic", "serene", "sharp",
    "silly", "sleepy", "stoic", "strange", "stupefied", "suspicious", "tender", "thirsty",
    "trusting", "upbeat", "vibrant", "vigilant", "wizardly", "wonderful", "xenodochial",
    "youthful", "zealous", "zen",
];

const SURNAMES: &[&str] = &[
    "agnesi", "albattani", "allen", "archimedes", "babbage", "banach", "bardeen", "bartik",
    "bell", "bhabha", "blackwell", "bohr", "booth", "borg", "bose", "brahmagupta", "brattain",
    "carson", "cerf", "chandrasekhar", "clarke", "curie", "darwin", "davinci", "dijkstra",
    "einstein", "elion", "engelbart", "euclid", "euler", "faraday", "fermat", "fermi", "feynman",
    "franklin", "galileo", "gauss", "goldberg", "goodall", "hamilton", "hawking", "heisenberg",
    "hodgkin", "hopper", "hypatia", "jackson", "jang", "johnson", "kalam", "kepler", "knuth",
    "kowalevski", "lamarr", "lamport", "leakey", "lovelace", "lumiere", "mayer", "mccarthy",
    "mcclintock", "meitner", "mendel", "morse", "newton", "nobel", "noether", "pascal",
    "pasteur", "perlman", "pike", "poincare", "ptolemy", "raman", "ramanujan", "ritchie",
    "rosalind", "sammet", "shannon", "sinoussi", "stallman", "swartz", "tesla", "thompson",
    "torvalds", "turing", "volhard", "wescoff", "wiles", "williams", "wozniak", "wright", "yalow",
];

/// A docker-style "Adjective Surname" name, e.g. "Admiring Turing".
pub fn random_name(roller: &mut impl Roller) -> String {
    let adjective = ADJECTIVES[roller.random_index(ADJECTIVES.len() - 1)];
    let surname = SURNAMES[roller.random_index(SURNAMES.len() - 1)];
    format!("{} {}", capitalize(adjective), capitalize(surname))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
