//! Seed word lists for vocabulary expansion, grouped by tier and category.

pub type CategoryList = (&'static str, &'static [&'static str]);

pub fn categories_for_tier(tier_id: i64) -> &'static [CategoryList] {
    match tier_id {
        1 => EARLY_VERBAL,
        2 => PRESCHOOL,
        3 => ELEMENTARY,
        4 => MIDDLE_SCHOOL,
        5 => HIGH_SCHOOL,
        6 => ADULT,
        _ => &[],
    }
}

const EARLY_VERBAL: &[CategoryList] = &[
    (
        "animals",
        &[
            "puppy", "kitty", "bunny", "duck", "fish", "bird", "cow", "pig", "sheep", "horse",
            "bear", "lion", "mouse", "frog", "bee", "ant", "spider", "snake", "turtle",
            "chicken",
        ],
    ),
    (
        "body",
        &[
            "head", "nose", "eyes", "ears", "mouth", "hand", "foot", "arm", "leg", "tummy",
            "hair", "teeth", "toe", "finger", "knee", "elbow", "back", "chest", "chin", "cheek",
        ],
    ),
    (
        "food",
        &[
            "apple", "banana", "milk", "bread", "egg", "rice", "meat", "fish", "cake", "cookie",
            "juice", "water", "soup", "pasta", "cheese", "yogurt", "cereal", "toast", "jam",
            "honey",
        ],
    ),
    (
        "colors",
        &[
            "red", "blue", "green", "yellow", "pink", "purple", "orange", "black", "white",
            "brown", "gray", "gold", "silver", "rainbow", "bright", "dark", "light", "shiny",
            "dull", "clear",
        ],
    ),
    (
        "actions",
        &[
            "run", "walk", "jump", "sit", "stand", "eat", "drink", "sleep", "wake", "play",
            "sing", "dance", "clap", "wave", "hug", "kiss", "laugh", "cry", "smile", "frown",
        ],
    ),
    (
        "toys",
        &[
            "ball", "doll", "car", "truck", "bike", "book", "blocks", "puzzle", "game", "bear",
            "train", "plane", "boat", "drum", "horn", "rattle", "swing", "slide", "sandbox",
            "balloon",
        ],
    ),
    (
        "clothes",
        &[
            "shirt", "pants", "dress", "shoes", "socks", "hat", "coat", "gloves", "scarf",
            "belt", "tie", "skirt", "shorts", "pajamas", "underwear", "boots", "sandals",
            "sweater", "jacket", "mittens",
        ],
    ),
    (
        "family",
        &[
            "mama", "dada", "baby", "sister", "brother", "grandma", "grandpa", "aunt", "uncle",
            "cousin", "friend", "neighbor", "teacher", "doctor", "nurse", "helper", "visitor",
            "guest", "family", "love",
        ],
    ),
    (
        "home",
        &[
            "house", "room", "bed", "chair", "table", "door", "window", "floor", "wall", "roof",
            "kitchen", "bathroom", "living", "stairs", "garden", "yard", "fence", "garage",
            "mailbox", "driveway",
        ],
    ),
    (
        "nature",
        &[
            "sun", "moon", "star", "sky", "cloud", "rain", "snow", "wind", "tree", "flower",
            "grass", "rock", "sand", "water", "ocean", "lake", "river", "mountain", "hill",
            "beach",
        ],
    ),
];

const PRESCHOOL: &[CategoryList] = &[
    (
        "emotions",
        &[
            "happy", "sad", "angry", "excited", "scared", "surprised", "worried", "calm",
            "proud", "shy", "brave", "kind", "mean", "gentle", "silly", "serious", "cheerful",
            "grumpy", "nervous", "confident",
        ],
    ),
    (
        "school",
        &[
            "teacher", "student", "classroom", "desk", "chair", "book", "pencil", "crayon",
            "paper", "scissors", "glue", "ruler", "eraser", "backpack", "lunchbox",
            "playground", "library", "computer", "tablet", "homework",
        ],
    ),
    (
        "community",
        &[
            "store", "hospital", "school", "park", "library", "restaurant", "gas station",
            "bank", "post office", "fire station", "police", "grocery", "bakery", "pharmacy",
            "museum", "zoo", "theater", "church", "temple", "mosque",
        ],
    ),
    (
        "transportation",
        &[
            "car", "bus", "train", "plane", "boat", "bike", "truck", "motorcycle", "helicopter",
            "subway", "taxi", "ambulance", "fire truck", "school bus", "van", "jeep", "scooter",
            "skateboard", "roller skates", "wagon",
        ],
    ),
    (
        "weather",
        &[
            "sunny", "cloudy", "rainy", "snowy", "windy", "stormy", "foggy", "hot", "cold",
            "warm", "cool", "freezing", "boiling", "humid", "dry", "wet", "icy", "frosty",
            "misty", "clear",
        ],
    ),
    (
        "time",
        &[
            "morning", "afternoon", "evening", "night", "today", "tomorrow", "yesterday",
            "week", "month", "year", "birthday", "holiday", "weekend", "weekday", "early",
            "late", "soon", "now", "then", "always",
        ],
    ),
    (
        "opposites",
        &[
            "big", "small", "tall", "short", "fat", "thin", "hot", "cold", "fast", "slow",
            "loud", "quiet", "hard", "soft", "rough", "smooth", "heavy", "light", "old", "new",
        ],
    ),
    (
        "shapes",
        &[
            "circle", "square", "triangle", "rectangle", "oval", "star", "heart", "diamond",
            "line", "curve", "corner", "edge", "round", "straight", "crooked", "flat", "thick",
            "thin", "wide", "narrow",
        ],
    ),
    (
        "numbers",
        &[
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
            "eighteen", "nineteen", "twenty",
        ],
    ),
    (
        "activities",
        &[
            "reading", "writing", "drawing", "painting", "singing", "dancing", "playing",
            "running", "swimming", "jumping", "climbing", "crawling", "skipping", "hopping",
            "marching", "spinning", "rolling", "sliding", "swinging", "bouncing",
        ],
    ),
];

const ELEMENTARY: &[CategoryList] = &[
    (
        "science",
        &[
            "experiment", "hypothesis", "observation", "microscope", "telescope", "magnet",
            "gravity", "energy", "matter", "liquid", "solid", "gas", "molecule", "atom",
            "element", "mixture", "solution", "reaction", "volcano", "earthquake",
        ],
    ),
    (
        "geography",
        &[
            "continent", "country", "state", "city", "town", "village", "mountain", "valley",
            "desert", "forest", "jungle", "island", "peninsula", "glacier", "canyon", "plateau",
            "plain", "coast", "harbor", "landmark",
        ],
    ),
    (
        "history",
        &[
            "ancient", "modern", "civilization", "culture", "tradition", "artifact", "monument",
            "castle", "pyramid", "temple", "explorer", "discovery", "invention", "revolution",
            "war", "peace", "treaty", "colony", "independence", "democracy",
        ],
    ),
    (
        "literature",
        &[
            "story", "chapter", "character", "plot", "setting", "theme", "moral", "lesson",
            "adventure", "mystery", "fantasy", "fiction", "nonfiction", "biography",
            "autobiography", "poetry", "rhyme", "rhythm", "metaphor", "simile",
        ],
    ),
    (
        "mathematics",
        &[
            "addition", "subtraction", "multiplication", "division", "fraction", "decimal",
            "percentage", "equation", "pattern", "sequence", "geometry", "measurement",
            "estimation", "probability", "statistics", "graph", "chart", "calculator",
            "compass", "protractor",
        ],
    ),
    (
        "technology",
        &[
            "computer", "internet", "website", "email", "password", "software", "hardware",
            "keyboard", "mouse", "monitor", "printer", "scanner", "camera", "video", "digital",
            "download", "upload", "save", "delete", "backup",
        ],
    ),
    (
        "health",
        &[
            "nutrition", "vitamin", "mineral", "protein", "carbohydrate", "exercise", "fitness",
            "muscle", "bone", "heart", "lungs", "brain", "nervous", "digestive", "immune",
            "vaccine", "medicine", "doctor", "nurse", "dentist",
        ],
    ),
    (
        "environment",
        &[
            "ecosystem", "habitat", "species", "endangered", "extinct", "pollution",
            "recycling", "conservation", "renewable", "nonrenewable", "solar", "wind",
            "hydroelectric", "fossil", "carbon", "oxygen", "atmosphere", "ozone", "greenhouse",
            "climate",
        ],
    ),
    (
        "government",
        &[
            "democracy", "republic", "president", "governor", "mayor", "senator",
            "representative", "congress", "parliament", "election", "vote", "citizen",
            "constitution", "amendment", "law", "court", "judge", "jury", "justice", "rights",
        ],
    ),
    (
        "economics",
        &[
            "money", "currency", "dollar", "cent", "budget", "income", "expense", "profit",
            "loss", "business", "company", "factory", "market", "customer", "service",
            "product", "advertisement", "competition", "supply", "demand",
        ],
    ),
];

const MIDDLE_SCHOOL: &[CategoryList] = &[
    (
        "biology",
        &[
            "organism", "cell", "tissue", "organ", "system", "DNA", "gene", "chromosome",
            "heredity", "evolution", "adaptation", "natural selection", "photosynthesis",
            "respiration", "digestion", "circulation", "reproduction", "metabolism",
            "homeostasis", "biodiversity",
        ],
    ),
    (
        "chemistry",
        &[
            "periodic table", "atomic number", "proton", "neutron", "electron", "isotope",
            "compound", "formula", "catalyst", "acid", "base", "pH", "oxidation", "reduction",
            "combustion", "precipitation", "crystallization", "distillation", "chromatography",
            "spectroscopy",
        ],
    ),
    (
        "physics",
        &[
            "force", "motion", "acceleration", "velocity", "momentum", "friction", "pressure",
            "density", "temperature", "heat", "light", "sound", "wave", "frequency",
            "amplitude", "reflection", "refraction", "magnetism", "electricity", "circuit",
        ],
    ),
    (
        "algebra",
        &[
            "variable", "coefficient", "constant", "expression", "equation", "inequality",
            "polynomial", "monomial", "binomial", "trinomial", "factoring", "slope",
            "intercept", "function", "domain", "range", "quadratic", "exponential", "logarithm",
            "matrix",
        ],
    ),
    (
        "world_history",
        &[
            "civilization", "empire", "dynasty", "feudalism", "renaissance", "reformation",
            "enlightenment", "revolution", "colonialism", "imperialism", "nationalism",
            "fascism", "communism", "capitalism", "socialism", "democracy", "dictatorship",
            "monarchy", "republic", "theocracy",
        ],
    ),
    (
        "literature",
        &[
            "protagonist", "antagonist", "conflict", "climax", "resolution", "symbolism",
            "allegory", "irony", "foreshadowing", "flashback", "narrative", "perspective",
            "point of view", "genre", "style", "tone", "mood", "theme", "motif", "allusion",
        ],
    ),
    (
        "geography",
        &[
            "longitude", "latitude", "equator", "hemisphere", "tropics", "tundra", "savanna",
            "monsoon", "hurricane", "tornado", "tsunami", "climate", "weather", "precipitation",
            "erosion", "sedimentation", "tectonics", "fault", "seismic", "topography",
        ],
    ),
    (
        "civics",
        &[
            "constitution", "amendment", "bill of rights", "separation of powers",
            "checks and balances", "federalism", "jurisdiction", "due process",
            "equal protection", "freedom of speech", "freedom of religion", "right to vote",
            "civil rights", "civil liberties", "judicial review", "legislative", "executive",
            "judicial", "impeachment", "veto",
        ],
    ),
    (
        "economics",
        &[
            "capitalism", "socialism", "market economy", "command economy", "mixed economy",
            "supply and demand", "inflation", "deflation", "recession", "depression",
            "gross domestic product", "unemployment", "interest rate", "stock market",
            "investment", "entrepreneur", "corporation", "monopoly", "competition", "trade",
        ],
    ),
    (
        "technology",
        &[
            "algorithm", "programming", "coding", "debugging", "database", "network", "server",
            "client", "protocol", "encryption", "artificial intelligence", "machine learning",
            "robotics", "automation", "virtual reality", "augmented reality", "cybersecurity",
            "malware", "firewall", "cloud computing",
        ],
    ),
];

const HIGH_SCHOOL: &[CategoryList] = &[
    (
        "advanced_science",
        &[
            "biochemistry", "molecular biology", "genetics", "biotechnology", "neuroscience",
            "immunology", "pharmacology", "pathology", "microbiology", "ecology",
            "thermodynamics", "quantum mechanics", "relativity", "electromagnetism",
            "nuclear physics", "astrophysics", "cosmology", "crystallography", "spectroscopy",
            "chromatography",
        ],
    ),
    (
        "calculus",
        &[
            "derivative", "integral", "limit", "continuity", "differential", "antiderivative",
            "optimization", "related rates", "implicit differentiation", "parametric equations",
            "polar coordinates", "infinite series", "convergence", "divergence",
            "Taylor series", "Fourier analysis", "vector calculus", "multivariable",
            "partial derivative", "gradient",
        ],
    ),
    (
        "advanced_literature",
        &[
            "existentialism", "postmodernism", "structuralism", "deconstruction", "feminism",
            "marxism", "psychoanalysis", "archetype", "bildungsroman", "epistolary",
            "stream of consciousness", "magical realism", "surrealism", "romanticism",
            "naturalism", "realism", "modernism", "postcolonialism", "diaspora", "hegemony",
        ],
    ),
    (
        "philosophy",
        &[
            "epistemology", "metaphysics", "ontology", "ethics", "aesthetics", "logic",
            "phenomenology", "empiricism", "rationalism", "skepticism", "determinism",
            "free will", "consciousness", "identity", "causation", "substance", "universals",
            "particulars", "mind-body problem", "moral relativism",
        ],
    ),
    (
        "psychology",
        &[
            "behaviorism", "cognitivism", "psychoanalysis", "humanistic", "biological",
            "developmental", "social", "abnormal", "personality", "intelligence", "memory",
            "perception", "motivation", "emotion", "learning", "conditioning", "reinforcement",
            "neuroplasticity", "psychopathology", "psychotherapy",
        ],
    ),
    (
        "sociology",
        &[
            "social stratification", "social mobility", "social institutions", "socialization",
            "deviance", "conformity", "social control", "cultural relativism", "ethnocentrism",
            "subculture", "counterculture", "social change", "globalization", "urbanization",
            "modernization", "postmodernization", "secularization", "bureaucracy",
            "charismatic authority", "social movements",
        ],
    ),
    (
        "political_science",
        &[
            "political theory", "comparative politics", "international relations",
            "public policy", "political economy", "political behavior", "electoral systems",
            "party systems", "interest groups", "lobbying", "political culture",
            "political socialization", "political participation", "political legitimacy",
            "sovereignty", "hegemony", "realpolitik", "diplomacy", "geopolitics",
            "supranational",
        ],
    ),
    (
        "economics",
        &[
            "microeconomics", "macroeconomics", "econometrics", "game theory",
            "behavioral economics", "institutional economics", "development economics",
            "international economics", "monetary policy", "fiscal policy", "elasticity",
            "utility", "marginal cost", "opportunity cost", "comparative advantage",
            "externalities", "public goods", "market failure", "regulatory capture",
            "globalization",
        ],
    ),
    (
        "statistics",
        &[
            "probability distribution", "normal distribution", "binomial distribution",
            "hypothesis testing", "significance level", "confidence interval", "correlation",
            "regression", "analysis of variance", "chi-square test", "t-test", "z-test",
            "sampling distribution", "central limit theorem", "type I error", "type II error",
            "statistical significance", "effect size", "meta-analysis", "bayesian statistics",
        ],
    ),
    (
        "computer_science",
        &[
            "data structures", "algorithms", "complexity analysis",
            "object-oriented programming", "functional programming", "recursion",
            "dynamic programming", "graph theory", "tree structures", "hash tables",
            "sorting algorithms", "searching algorithms", "machine learning",
            "artificial intelligence", "neural networks", "deep learning",
            "natural language processing", "computer vision", "cybersecurity", "cryptography",
        ],
    ),
];

const ADULT: &[CategoryList] = &[
    (
        "professional",
        &[
            "entrepreneurship", "leadership", "management", "strategic planning",
            "organizational behavior", "human resources", "marketing", "finance", "accounting",
            "operations", "supply chain", "logistics", "quality assurance",
            "project management", "risk management", "compliance", "governance", "stakeholder",
            "sustainability", "innovation",
        ],
    ),
    (
        "academic",
        &[
            "methodology", "epistemology", "hermeneutics", "paradigm", "theoretical framework",
            "empirical research", "qualitative analysis", "quantitative analysis",
            "meta-analysis", "systematic review", "peer review", "academic integrity",
            "plagiarism", "citation", "bibliography", "dissertation", "thesis", "hypothesis",
            "variable", "correlation",
        ],
    ),
    (
        "technical",
        &[
            "architecture", "infrastructure", "scalability", "optimization", "automation",
            "integration", "implementation", "deployment", "maintenance", "troubleshooting",
            "debugging", "version control", "documentation", "testing", "validation",
            "verification", "configuration", "customization", "migration", "upgrade",
        ],
    ),
    (
        "legal",
        &[
            "jurisprudence", "constitutional law", "criminal law", "civil law", "contract law",
            "tort law", "property law", "intellectual property", "corporate law",
            "international law", "human rights", "civil liberties", "due process",
            "equal protection", "judicial review", "precedent", "statute", "regulation",
            "litigation", "arbitration",
        ],
    ),
    (
        "medical",
        &[
            "pathophysiology", "pharmacokinetics", "pharmacodynamics", "differential diagnosis",
            "prognosis", "etiology", "epidemiology", "biostatistics", "evidence-based medicine",
            "clinical trials", "systematic review", "meta-analysis", "adverse effects",
            "contraindications", "therapeutic index", "bioavailability", "metabolism",
            "excretion", "pharmacovigilance", "personalized medicine",
        ],
    ),
    (
        "financial",
        &[
            "portfolio management", "asset allocation", "diversification", "risk assessment",
            "due diligence", "valuation", "discounted cash flow", "net present value",
            "internal rate of return", "capital asset pricing model",
            "efficient market hypothesis", "behavioral finance", "derivatives", "hedge funds",
            "private equity", "venture capital", "initial public offering",
            "mergers and acquisitions", "corporate governance", "regulatory compliance",
        ],
    ),
    (
        "international",
        &[
            "globalization", "multinational corporation", "foreign direct investment",
            "international trade", "comparative advantage", "exchange rates",
            "balance of payments", "trade deficit", "protectionism", "free trade agreement",
            "world trade organization", "international monetary fund", "world bank",
            "development aid", "sustainable development", "millennium development goals",
            "sustainable development goals", "climate change", "global governance",
            "transnational",
        ],
    ),
    (
        "research",
        &[
            "experimental design", "control group", "randomization", "blinding",
            "statistical power", "effect size", "confidence interval", "p-value",
            "statistical significance", "clinical significance", "external validity",
            "internal validity", "confounding variables", "selection bias", "information bias",
            "publication bias", "systematic error", "random error", "reliability", "validity",
        ],
    ),
    (
        "communication",
        &[
            "rhetoric", "persuasion", "argumentation", "critical thinking", "logical fallacy",
            "cognitive bias", "propaganda", "public relations", "crisis communication",
            "intercultural communication", "nonverbal communication", "digital communication",
            "social media", "content marketing", "brand management", "reputation management",
            "stakeholder engagement", "public opinion", "media literacy",
            "information literacy",
        ],
    ),
    (
        "interdisciplinary",
        &[
            "systems thinking", "complexity theory", "network analysis", "game theory",
            "decision theory", "behavioral economics", "neuroeconomics",
            "computational biology", "bioinformatics", "artificial intelligence",
            "machine learning", "data science", "big data", "predictive analytics",
            "business intelligence", "knowledge management", "innovation management",
            "technology transfer", "intellectual property", "commercialization",
        ],
    ),
];
