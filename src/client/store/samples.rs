/// Seed questions offered when the bank is empty.
pub(crate) const SAMPLE_QUESTIONS: [(&str, &str, [&str; 4]); 15] = [
    (
        "What is the capital of France?",
        "Paris",
        ["Paris", "London", "Berlin", "Madrid"],
    ),
    (
        "Which planet is known as the Red Planet?",
        "Mars",
        ["Venus", "Mars", "Jupiter", "Saturn"],
    ),
    (
        "What is 2 + 2?",
        "4",
        ["3", "4", "5", "6"],
    ),
    (
        "Who painted the Mona Lisa?",
        "Leonardo da Vinci",
        ["Vincent van Gogh", "Pablo Picasso", "Leonardo da Vinci", "Michelangelo"],
    ),
    (
        "What is the largest ocean on Earth?",
        "Pacific Ocean",
        ["Atlantic Ocean", "Indian Ocean", "Pacific Ocean", "Arctic Ocean"],
    ),
    (
        "Which element has the chemical symbol 'Au'?",
        "Gold",
        ["Silver", "Gold", "Copper", "Aluminum"],
    ),
    (
        "What is the capital of Japan?",
        "Tokyo",
        ["Seoul", "Beijing", "Tokyo", "Bangkok"],
    ),
    (
        "Who wrote 'Romeo and Juliet'?",
        "William Shakespeare",
        ["Charles Dickens", "Jane Austen", "Mark Twain", "William Shakespeare"],
    ),
    (
        "What year did World War II end?",
        "1945",
        ["1943", "1944", "1945", "1946"],
    ),
    (
        "Which programming language was created by Guido van Rossum?",
        "Python",
        ["Java", "Python", "C++", "JavaScript"],
    ),
    (
        "What is the square root of 144?",
        "12",
        ["10", "11", "12", "14"],
    ),
    (
        "Which animal is known as the 'King of the Jungle'?",
        "Lion",
        ["Tiger", "Lion", "Elephant", "Gorilla"],
    ),
    (
        "What is the hardest natural substance on Earth?",
        "Diamond",
        ["Gold", "Iron", "Diamond", "Platinum"],
    ),
    (
        "Who invented the telephone?",
        "Alexander Graham Bell",
        ["Thomas Edison", "Alexander Graham Bell", "Nikola Tesla", "Albert Einstein"],
    ),
    (
        "What is the main component of the Sun?",
        "Hydrogen",
        ["Oxygen", "Carbon", "Helium", "Hydrogen"],
    ),
];
