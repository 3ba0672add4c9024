//! The poems on the reading list.
//!
//! All texts are public domain and quoted from the standard published
//! versions.

use crate::works::{
    CharacterNote, ComprehensionPassage, LineExplanation, LiteraryDevice, LiteraryWork, Mcq,
    WorkKind,
};

/// Every poem, in syllabus order.
pub(super) fn poems() -> Vec<LiteraryWork> {
    vec![
        daffodils(),
        abou_ben_adhem(),
        the_heart_of_the_tree(),
        after_blenheim(),
        the_bangle_sellers(),
    ]
}

fn daffodils() -> LiteraryWork {
    LiteraryWork::new("daffodils", "Daffodils", WorkKind::Poem)
        .with_author("William Wordsworth")
        .with_summary(
            "The speaker, wandering alone, comes upon a vast stretch of golden \
             daffodils dancing beside a lake. Long afterwards, the remembered \
             sight fills his solitary hours with pleasure.",
        )
        .with_detailed_summary(
            "Wordsworth recalls a walk during which he came, all at once, upon \
             a great crowd of daffodils beside a lake, fluttering and dancing \
             in the breeze. They seemed continuous as the stars of the Milky \
             Way, ten thousand at a glance, outdoing the sparkling waves in \
             glee. At the time he only gazed, not realising what wealth the \
             scene had brought him. The final stanza turns inward: whenever he \
             lies on his couch in a vacant or pensive mood, the daffodils \
             flash upon his 'inward eye' and his heart dances with them again. \
             The poem is Wordsworth's clearest statement of how nature, stored \
             in memory, becomes a permanent source of joy.",
        )
        .with_themes([
            "Nature's beauty",
            "Memory and imagination",
            "Solitude",
            "Joy",
        ])
        .with_key_points([
            "Composed around 1804 and inspired by a lakeside walk Wordsworth took with his sister Dorothy at Ullswater.",
            "A Romantic lyric in four six-line stanzas rhyming ABABCC, written in iambic tetrameter.",
            "The 'inward eye' names the faculty of memory and imagination that replays the scene in solitude.",
            "The movement of the poem runs from outward seeing to inward feeling: the daffodils end up dancing in the speaker's heart.",
        ])
        .with_line_explanation(LineExplanation::new(
            "Lines 1-6",
            "I wandered lonely as a cloud\n\
             That floats on high o'er vales and hills,\n\
             When all at once I saw a crowd,\n\
             A host, of golden daffodils;\n\
             Beside the lake, beneath the trees,\n\
             Fluttering and dancing in the breeze.",
            "The speaker drifts aimlessly, detached from the world like a \
             cloud floating above valleys and hills. Suddenly he sees a huge \
             gathering of golden daffodils by the lake, under the trees. \
             Calling them a 'crowd' and a 'host' makes the flowers feel like a \
             joyous assembly of people, already 'fluttering and dancing'.",
        ))
        .with_line_explanation(LineExplanation::new(
            "Lines 7-12",
            "Continuous as the stars that shine\n\
             And twinkle on the milky way,\n\
             They stretched in never-ending line\n\
             Along the margin of a bay:\n\
             Ten thousand saw I at a glance,\n\
             Tossing their heads in sprightly dance.",
            "The daffodils seem endless, like the band of stars in the Milky \
             Way, running in an unbroken line along the edge of the bay. 'Ten \
             thousand saw I at a glance' is a deliberate exaggeration of their \
             number, and 'tossing their heads' again turns them into lively \
             dancers.",
        ))
        .with_line_explanation(LineExplanation::new(
            "Lines 13-18",
            "The waves beside them danced; but they\n\
             Out-did the sparkling waves in glee:\n\
             A poet could not but be gay,\n\
             In such a jocund company:\n\
             I gazed—and gazed—but little thought\n\
             What wealth the show to me had brought:",
            "Even the lake's waves dance, but the daffodils outdo them in \
             happiness. In such cheerful ('jocund') company the poet cannot \
             help but feel glad. The repeated 'gazed' shows him absorbed in \
             the sight, while 'little thought' admits he did not yet grasp the \
             lasting 'wealth', the store of joy, the scene was giving him.",
        ))
        .with_line_explanation(LineExplanation::new(
            "Lines 19-24",
            "For oft, when on my couch I lie\n\
             In vacant or in pensive mood,\n\
             They flash upon that inward eye\n\
             Which is the bliss of solitude;\n\
             And then my heart with pleasure fills,\n\
             And dances with the daffodils.",
            "The final stanza moves to the present. Often, lying idle or lost \
             in thought, the poet finds the daffodils flashing upon his \
             'inward eye', his memory and imagination, which makes solitude \
             blissful rather than lonely. His heart fills with pleasure and \
             joins the flowers' dance.",
        ))
        .with_mcq(
            Mcq::new(
                "To what does the speaker compare himself at the start of the poem?",
                [
                    "A floating cloud",
                    "A golden daffodil",
                    "A sparkling wave",
                    "A twinkling star",
                ],
                0,
            )
            .with_explanation(
                "The opening simile is 'I wandered lonely as a cloud / That \
                 floats on high o'er vales and hills'.",
            ),
        )
        .with_mcq(
            Mcq::new(
                "Where does the speaker come upon the daffodils?",
                [
                    "Along a mountain road",
                    "Beside the lake, beneath the trees",
                    "In his own garden",
                    "At the margin of a cornfield",
                ],
                1,
            )
            .with_explanation("The first stanza places them 'Beside the lake, beneath the trees'."),
        )
        .with_mcq(
            Mcq::new(
                "To what are the daffodils compared in the second stanza?",
                [
                    "The waves of the bay",
                    "The stars of the Milky Way",
                    "A marching army",
                    "Clouds drifting over the hills",
                ],
                1,
            )
            .with_explanation(
                "They are 'Continuous as the stars that shine / And twinkle on \
                 the milky way', stretching in a never-ending line.",
            ),
        )
        .with_mcq(
            Mcq::new(
                "How many daffodils does the speaker say he saw at a glance?",
                ["A hundred", "A thousand", "Ten thousand", "Countless millions"],
                2,
            )
            .with_explanation("'Ten thousand saw I at a glance' is the poem's famous hyperbole."),
        )
        .with_mcq(
            Mcq::new(
                "What does the poet call 'the bliss of solitude'?",
                [
                    "The dancing waves",
                    "His pensive mood",
                    "The inward eye",
                    "The jocund company",
                ],
                2,
            )
            .with_explanation(
                "The daffodils 'flash upon that inward eye / Which is the bliss \
                 of solitude', the inward eye being memory.",
            ),
        )
        .with_mcq(
            Mcq::new(
                "What happens when the daffodils flash upon the speaker's inward eye?",
                [
                    "He falls into a deep sleep",
                    "His heart fills with pleasure and dances with them",
                    "He resolves to return to the lake",
                    "He grows sad at the memory",
                ],
                1,
            )
            .with_explanation(
                "The closing couplet: 'And then my heart with pleasure fills, / \
                 And dances with the daffodils.'",
            ),
        )
        .with_passage(
            ComprehensionPassage::new(
                "daffodils-first-sight",
                "I wandered lonely as a cloud\n\
                 That floats on high o'er vales and hills,\n\
                 When all at once I saw a crowd,\n\
                 A host, of golden daffodils;\n\
                 Beside the lake, beneath the trees,\n\
                 Fluttering and dancing in the breeze.",
            )
            .with_question(
                "What picture of the speaker's state of mind does the opening simile give?",
                "Comparing himself to a cloud floating high over vales and \
                 hills suggests he is solitary, aimless and detached, drifting \
                 without purpose or companionship above the life below.",
            )
            .with_question(
                "Which words present the daffodils as a gathering of people, and to what effect?",
                "'Crowd' and 'host' are words for human assemblies, and \
                 'dancing' gives the flowers deliberate, joyful movement. The \
                 lonely speaker suddenly finds himself in lively company.",
            )
            .with_question(
                "How does the phrase 'all at once' shape the experience described?",
                "It makes the sight a surprise. The daffodils are not sought \
                 out but stumbled upon, which is why the scene strikes the \
                 speaker with such force and fixes itself in his memory.",
            ),
        )
        .with_passage(
            ComprehensionPassage::new(
                "daffodils-inward-eye",
                "For oft, when on my couch I lie\n\
                 In vacant or in pensive mood,\n\
                 They flash upon that inward eye\n\
                 Which is the bliss of solitude;\n\
                 And then my heart with pleasure fills,\n\
                 And dances with the daffodils.",
            )
            .with_question(
                "What is the 'inward eye', and why is it called 'the bliss of solitude'?",
                "The inward eye is memory working through imagination. It \
                 turns solitude from emptiness into bliss, since the stored \
                 vision of the daffodils can be summoned and enjoyed when the \
                 poet is alone.",
            )
            .with_question(
                "Distinguish the moods named in 'vacant or in pensive mood'.",
                "'Vacant' is an empty, idle state of mind; 'pensive' is \
                 quietly thoughtful, even a little melancholy. In either state \
                 the remembered daffodils arrive unbidden and lift him.",
            )
            .with_question(
                "How does the last line complete the poem's movement from seeing to feeling?",
                "The dance that began in the flowers passes finally to the \
                 poet himself: his heart 'dances with the daffodils'. What was \
                 once an outward scene has become an inward, renewable joy.",
            ),
        )
        .with_device(LiteraryDevice::new(
            "Simile",
            "I wandered lonely as a cloud",
            "The speaker's drifting detachment is likened to a cloud floating \
             high above the landscape, setting up the solitude the daffodils \
             will relieve.",
        ))
        .with_device(LiteraryDevice::new(
            "Personification",
            "Tossing their heads in sprightly dance",
            "The daffodils are given heads and the power to dance, making \
             them joyful companions rather than mere flowers.",
        ))
        .with_device(LiteraryDevice::new(
            "Hyperbole",
            "Ten thousand saw I at a glance",
            "Deliberate exaggeration conveys the overwhelming profusion of \
             the flowers along the bay.",
        ))
        .with_device(LiteraryDevice::new(
            "Alliteration",
            "Beside the lake, beneath the trees",
            "The repeated 'b' sound binds the line together and gives the \
             scene-setting a gentle, rocking rhythm.",
        ))
        .with_device(LiteraryDevice::new(
            "Metaphor",
            "That inward eye / Which is the bliss of solitude",
            "Memory is figured as an eye that sees inwardly, letting the poet \
             re-view the daffodils whenever he is alone.",
        ))
        .with_quotes([
            "I wandered lonely as a cloud / That floats on high o'er vales and hills",
            "Ten thousand saw I at a glance, / Tossing their heads in sprightly dance.",
            "They flash upon that inward eye / Which is the bliss of solitude",
        ])
}

fn abou_ben_adhem() -> LiteraryWork {
    LiteraryWork::new("abou-ben-adhem", "Abou Ben Adhem", WorkKind::Poem)
        .with_author("Leigh Hunt")
        .with_summary(
            "Abou Ben Adhem wakes to find an angel writing the names of those \
             who love the Lord. His own name is not among them, so he asks to \
             be written down as one who loves his fellow men; the next night \
             his name leads the whole list.",
        )
        .with_detailed_summary(
            "Waking from a peaceful dream, Abou Ben Adhem finds his moonlit \
             room made rich by an angel writing in a book of gold. Emboldened \
             by the deep peace he feels, he asks what the angel writes, and is \
             told: the names of those who love the Lord. Learning that his own \
             name is not among them, Abou neither protests nor despairs; still \
             cheerful, he asks to be recorded instead as 'one that loves his \
             fellow men'. The angel writes and vanishes. The next night it \
             returns with a great wakening light to show the names whom love \
             of God has blessed, and Abou's name leads all the rest. The poem, \
             drawn from the story of the Sufi saint Ibrahim bin Adham, teaches \
             that love of humanity is the truest form of love of God.",
        )
        .with_themes([
            "Love of humanity",
            "True devotion",
            "Peace and contentment",
            "Humility",
        ])
        .with_key_points([
            "Published in 1834; a narrative poem in rhyming couplets with a parable's shape and economy.",
            "Based on the legend of Ibrahim bin Adham, an eighth-century Sufi saint renowned for his piety.",
            "Abou's 'exceeding peace' is what makes him bold enough to address the angel at all.",
            "The reversal in the final line carries the whole moral: serving people is the highest service of God.",
        ])
        .with_line_explanation(LineExplanation::new(
            "Lines 1-5",
            "Abou Ben Adhem (may his tribe increase!)\n\
             Awoke one night from a deep dream of peace,\n\
             And saw, within the moonlight in his room,\n\
             Making it rich, and like a lily in bloom,\n\
             An angel writing in a book of gold:—",
            "The blessing in brackets, 'may his tribe increase!', marks Abou \
             out at once as a man worth honouring. He wakes from a peaceful \
             dream to find his room transformed: the moonlight makes it rich, \
             and the angel within it is likened to a lily in bloom, pure and \
             luminous, writing in a golden record book.",
        ))
        .with_line_explanation(LineExplanation::new(
            "Lines 6-10",
            "Exceeding peace had made Ben Adhem bold,\n\
             And to the presence in the room he said,\n\
             'What writest thou?'—The vision raised its head,\n\
             And with a look made of all sweet accord,\n\
             Answered, 'The names of those who love the Lord.'",
            "A guilty man would fear such a visitor, but Abou's deep inner \
             peace makes him bold enough to question it directly. The angel \
             answers with perfect gentleness ('all sweet accord'): it is \
             recording the names of those who love God.",
        ))
        .with_line_explanation(LineExplanation::new(
            "Lines 11-14",
            "'And is mine one?' said Abou. 'Nay, not so,'\n\
             Replied the angel. Abou spoke more low,\n\
             But cheerly still; and said, 'I pray thee, then,\n\
             Write me as one that loves his fellow men.'",
            "Told that his name is not on the list, Abou's voice drops but \
             his cheerfulness does not. Without bitterness he makes his \
             famous request: let him be recorded simply as a man who loves \
             his fellow men. The humility of the reply is the hinge of the \
             poem.",
        ))
        .with_line_explanation(LineExplanation::new(
            "Lines 15-18",
            "The angel wrote, and vanished. The next night\n\
             It came again with a great wakening light,\n\
             And showed the names whom love of God had blessed,\n\
             And lo! Ben Adhem's name led all the rest.",
            "The angel returns with a light that wakes the sleeper, now \
             showing the names God's love has blessed. Abou's name stands \
             first: his love of his fellow men has proved to be the highest \
             love of the Lord.",
        ))
        .with_mcq(
            Mcq::new(
                "What did Abou Ben Adhem wake from?",
                [
                    "A frightening nightmare",
                    "A deep dream of peace",
                    "The angel's call",
                    "The light of dawn",
                ],
                1,
            )
            .with_explanation("He 'Awoke one night from a deep dream of peace'."),
        )
        .with_mcq(
            Mcq::new(
                "What was the angel writing in the book of gold?",
                [
                    "The names of those who love the Lord",
                    "The deeds of the righteous",
                    "The names of those who love their fellow men",
                    "The history of Abou's tribe",
                ],
                0,
            )
            .with_explanation(
                "The vision answers, 'The names of those who love the Lord.' \
                 The list of those blessed by God's love comes only on the \
                 second night.",
            ),
        )
        .with_mcq(
            Mcq::new(
                "How does Abou react on learning his name is not on the list?",
                [
                    "He argues angrily with the angel",
                    "He speaks lower but remains cheerful",
                    "He begs the angel for forgiveness",
                    "He returns to sleep in despair",
                ],
                1,
            )
            .with_explanation("'Abou spoke more low, / But cheerly still'."),
        )
        .with_mcq(
            Mcq::new(
                "What does Abou ask the angel to write?",
                [
                    "That he loves the Lord above all things",
                    "That his tribe may increase",
                    "That he loves his fellow men",
                    "That he seeks the angel's blessing",
                ],
                2,
            )
            .with_explanation("'Write me as one that loves his fellow men.'"),
        )
        .with_mcq(
            Mcq::new(
                "What does the angel show on its second visit?",
                [
                    "The names whom love of God had blessed, led by Abou's",
                    "A blank book of gold",
                    "The names of Abou's ancestors",
                    "A warning to the unfaithful",
                ],
                0,
            )
            .with_explanation(
                "It 'showed the names whom love of God had blessed, / And lo! \
                 Ben Adhem's name led all the rest.'",
            ),
        )
        .with_passage(
            ComprehensionPassage::new(
                "abou-the-question",
                "Abou Ben Adhem (may his tribe increase!)\n\
                 Awoke one night from a deep dream of peace,\n\
                 And saw, within the moonlight in his room,\n\
                 Making it rich, and like a lily in bloom,\n\
                 An angel writing in a book of gold:—\n\
                 Exceeding peace had made Ben Adhem bold,\n\
                 And to the presence in the room he said,\n\
                 'What writest thou?'—The vision raised its head,\n\
                 And with a look made of all sweet accord,\n\
                 Answered, 'The names of those who love the Lord.'",
            )
            .with_question(
                "What does the parenthesis 'may his tribe increase!' contribute to the opening line?",
                "It is the narrator's own blessing on Abou, signalling before \
                 the story begins that this is a good man whose kind should \
                 multiply. The reader is disposed in his favour at once.",
            )
            .with_question(
                "Why is Abou bold enough to address the angel?",
                "'Exceeding peace had made Ben Adhem bold': his conscience is \
                 clear and his heart at rest, so the supernatural visitor \
                 stirs curiosity in him rather than fear.",
            )
            .with_question(
                "How does the simile 'like a lily in bloom' suit the visitor?",
                "The lily is pure, white and luminous, matching the angel's \
                 holiness and the moonlit brightness it brings into the \
                 ordinary room.",
            ),
        )
        .with_passage(
            ComprehensionPassage::new(
                "abou-the-blessing",
                "'And is mine one?' said Abou. 'Nay, not so,'\n\
                 Replied the angel. Abou spoke more low,\n\
                 But cheerly still; and said, 'I pray thee, then,\n\
                 Write me as one that loves his fellow men.'\n\
                 The angel wrote, and vanished. The next night\n\
                 It came again with a great wakening light,\n\
                 And showed the names whom love of God had blessed,\n\
                 And lo! Ben Adhem's name led all the rest.",
            )
            .with_question(
                "What do the words 'But cheerly still' reveal about Abou's character?",
                "Even a divine rebuff cannot sour him. He accepts the news \
                 without resentment or self-pity, showing the humility and \
                 settled contentment the poem holds up for admiration.",
            )
            .with_question(
                "How do the two lists shown by the angel differ, and why does it matter?",
                "The first records those who love the Lord; the second, those \
                 whom the love of God has blessed. Abou heads the second list, \
                 which reverses our expectation and delivers the moral: God \
                 most blesses the one who loves his fellow men.",
            )
            .with_question(
                "What is the force of 'And lo!' in the final line?",
                "It is an exclamation of wonder that asks the reader to share \
                 the surprise of the revelation, giving the quiet parable a \
                 triumphant close.",
            ),
        )
        .with_device(LiteraryDevice::new(
            "Simile",
            "Making it rich, and like a lily in bloom",
            "The angel's presence in the moonlit room is compared to a lily, \
             an emblem of purity, so the visitation feels serene rather than \
             terrifying.",
        ))
        .with_device(LiteraryDevice::new(
            "Symbolism",
            "An angel writing in a book of gold",
            "The golden book stands for the divine record of human worth; \
             gold marks what heaven values as precious.",
        ))
        .with_device(LiteraryDevice::new(
            "Metaphor",
            "A deep dream of peace",
            "Abou's sleep is not merely quiet but saturated with peace, the \
             outward sign of a clear conscience.",
        ))
        .with_device(LiteraryDevice::new(
            "Archaic diction",
            "What writest thou?",
            "The older verb forms lend the exchange a scriptural gravity, \
             fitting a conversation between a man and an angel.",
        ))
        .with_quotes([
            "Write me as one that loves his fellow men.",
            "And lo! Ben Adhem's name led all the rest.",
            "Exceeding peace had made Ben Adhem bold",
        ])
}

fn the_heart_of_the_tree() -> LiteraryWork {
    LiteraryWork::new(
        "the-heart-of-the-tree",
        "The Heart of the Tree",
        WorkKind::Poem,
    )
    .with_author("Henry Cuyler Bunner")
    .with_summary(
        "Built on one repeated question, 'What does he plant who plants a \
         tree?', the poem answers stanza by stanza: a friend of sun and sky, \
         a harvest for ages to come, and at last the growth of a whole \
         nation.",
    )
    .with_detailed_summary(
        "Each of the three nine-line stanzas opens with the same question and \
         answers it on a rising scale. The first stanza stays with nature: \
         the planter plants a friend of sun and sky, a flag of breezes, a \
         shaft of beauty, a home for birds whose song is heaven's harmony. \
         The second looks to time: cool shade and tender rain, seed and bud \
         of days to be, the forest's heritage and a harvest that unborn eyes \
         shall see. The third turns inward and civic: in sap and leaf and \
         wood the planter plants love of home, loyalty and far-sighted care \
         for the common good, and a nation's growth from sea to sea stirs in \
         his heart. The poem dignifies a small act by tracing its largest \
         consequences.",
    )
    .with_themes([
        "Tree planting",
        "Service to posterity",
        "Civic good",
        "Man and nature",
    ])
    .with_key_points([
        "Three nine-line stanzas, each framed as a question and its unfolding answer.",
        "The scale of the answers widens stanza by stanza: nature, future generations, the nation.",
        "The 'heart of the tree' of the title is finally the planter's own heart, where the nation's growth stirs.",
        "The refrain-question is rhetorical; the poem exists to supply its answers.",
    ])
    .with_line_explanation(LineExplanation::new(
        "Stanza 1",
        "What does he plant who plants a tree?\n\
         He plants a friend of sun and sky;\n\
         He plants the flag of breezes free;\n\
         The shaft of beauty, towering high;\n\
         He plants a home to heaven anigh;\n\
         For song and mother-croon of bird\n\
         In hushed and happy twilight heard—\n\
         The treble of heaven's harmony—\n\
         These things he plants who plants a tree.",
        "The planter gives the sun and sky a companion, raises a living \
         flagstaff for the free winds, and sets up a towering shaft of \
         beauty. The tree is a home near heaven where birds sing and croon \
         to their young in the twilight, their song the high part in \
         heaven's music.",
    ))
    .with_line_explanation(LineExplanation::new(
        "Stanza 2",
        "What does he plant who plants a tree?\n\
         He plants cool shade and tender rain,\n\
         And seed and bud of days to be,\n\
         And years that fade and flush again;\n\
         He plants the glory of the plain;\n\
         He plants the forest's heritage;\n\
         The harvest of a coming age;\n\
         The joy that unborn eyes shall see—\n\
         These things he plants who plants a tree.",
        "The answers now reach into the future. The tree will give shade, \
         gentle the rain, and carry seed and bud through the turning years. \
         It is the glory of the open plain, the inheritance of the forest, \
         a harvest for an age not yet come, a joy for eyes not yet born.",
    ))
    .with_line_explanation(LineExplanation::new(
        "Stanza 3",
        "What does he plant who plants a tree?\n\
         He plants, in sap and leaf and wood,\n\
         In love of home and loyalty\n\
         And far-cast thought of civic good—\n\
         His blessings on the neighborhood,\n\
         Who in the hollow of His hand\n\
         Holds all the growth of all our land—\n\
         A nation's growth from sea to sea\n\
         Stirs in his heart who plants a tree.",
        "The final stanza moves from the tree to the planter. In the tree's \
         very substance he plants love of home, loyalty, and far-sighted \
         concern for the public good, a blessing on his neighbourhood. God, \
         who holds all the land's growth in the hollow of His hand, works \
         through such planters; the growth of a whole nation stirs in the \
         heart of the one who plants a tree.",
    ))
    .with_mcq(
        Mcq::new(
            "With what question does every stanza open?",
            [
                "What does he plant who plants a tree?",
                "Who plants a tree for days to be?",
                "What grows from seed and bud?",
                "Whose hand holds all our land?",
            ],
            0,
        )
        .with_explanation("The repeated question is the frame the whole poem hangs on."),
    )
    .with_mcq(
        Mcq::new(
            "In the first stanza, the tree is called a friend of what?",
            [
                "Breezes free",
                "Sun and sky",
                "Heaven's harmony",
                "The happy twilight",
            ],
            1,
        )
        .with_explanation("'He plants a friend of sun and sky'."),
    )
    .with_mcq(
        Mcq::new(
            "Who will enjoy 'the harvest of a coming age'?",
            [
                "The planter himself",
                "The birds of the forest",
                "Future generations",
                "The planter's neighbours",
            ],
            2,
        )
        .with_explanation(
            "The second stanza looks ahead to 'The joy that unborn eyes shall \
             see': those not yet born will reap what the planter sows.",
        ),
    )
    .with_mcq(
        Mcq::new(
            "What, in the final lines, 'stirs in his heart who plants a tree'?",
            [
                "The mother-croon of birds",
                "A nation's growth from sea to sea",
                "The forest's heritage",
                "The glory of the plain",
            ],
            1,
        )
        .with_explanation(
            "The civic vision crowns the poem: planting a tree takes part in \
             'A nation's growth from sea to sea'.",
        ),
    )
    .with_device(LiteraryDevice::new(
        "Rhetorical question",
        "What does he plant who plants a tree?",
        "The opening question of each stanza expects no reply from the \
         reader; the poem itself supplies the answers, on an ever larger \
         scale.",
    ))
    .with_device(LiteraryDevice::new(
        "Metaphor",
        "He plants the flag of breezes free",
        "The tree is a flagstaff and its foliage the flag the wind flies, \
         an image of freedom raised by the planter.",
    ))
    .with_device(LiteraryDevice::new(
        "Anaphora",
        "He plants... He plants... He plants",
        "The insistent repetition at line-openings piles answer upon answer, \
         enacting the abundance that one planted tree sets going.",
    ))
    .with_device(LiteraryDevice::new(
        "Imagery",
        "He plants cool shade and tender rain",
        "Touch is invoked alongside sight; the tree's future gifts are felt \
         as sensations before they are understood as benefits.",
    ))
    .with_quotes([
        "What does he plant who plants a tree? / He plants a friend of sun and sky",
        "The joy that unborn eyes shall see",
        "A nation's growth from sea to sea / Stirs in his heart who plants a tree.",
    ])
}

fn after_blenheim() -> LiteraryWork {
    LiteraryWork::new("after-blenheim", "After Blenheim", WorkKind::Poem)
        .with_author("Robert Southey")
        .with_summary(
            "By a cottage door, old Kaspar tells his grandchildren about the \
             famous victory once won at Blenheim. He can describe its horrors \
             but not its purpose, and his refrain, 'a famous victory', rings \
             hollower each time it returns.",
        )
        .with_detailed_summary(
            "On a summer evening the farmer Kaspar sits before his cottage \
             while his grandchildren play. Peterkin finds something large, \
             smooth and round by the stream; Kaspar identifies it with a sigh \
             as a skull, one of many his plough still turns out of the fields \
             where thousands were slain in the great victory. Pressed by the \
             children to say what the war was about, Kaspar can only repeat \
             what everybody said: that the English put the French to rout and \
             that it was a famous victory. He tells how his father's home was \
             burnt, how mothers and newborns died, how thousands of bodies \
             rotted in the sun, each horror shrugged off with 'things like \
             that, you know, must be'. When Wilhelmine calls the whole affair \
             a wicked thing, he corrects her; when Peterkin asks what good \
             came of it at last, he cannot tell. The poem is an anti-war \
             ballad whose irony lives in the gap between the refrain and the \
             facts it keeps excusing.",
        )
        .with_themes([
            "The futility of war",
            "Hollow glory",
            "Innocence questioning authority",
            "Memory and history",
        ])
        .with_key_points([
            "Written in 1796 about the Battle of Blenheim (1704), fought in the War of the Spanish Succession.",
            "A ballad told almost wholly in dialogue between Kaspar, Peterkin and Wilhelmine.",
            "Kaspar repeats received opinion ('everybody said') without ever being able to explain the war's purpose.",
            "The children's plain questions expose what the adult's refrain papers over; the irony is left for the reader to complete.",
        ])
        .with_line_explanation(LineExplanation::new(
            "Lines 1-12",
            "It was a summer evening,\n\
             Old Kaspar's work was done,\n\
             And he before his cottage door\n\
             Was sitting in the sun;\n\
             And by him sported on the green\n\
             His little grandchild Wilhelmine.\n\
             She saw her brother Peterkin\n\
             Roll something large and round\n\
             Which he beside the rivulet\n\
             In playing there had found;\n\
             He came to ask what he had found,\n\
             That was so large, and smooth, and round.",
            "The poem opens in deep peace: work done, evening sun, children \
             at play. Into this calm Peterkin rolls his find from beside the \
             little stream. The repeated 'large... smooth... round' keeps the \
             object innocently unnamed, letting the next stanza's revelation \
             land harder.",
        ))
        .with_line_explanation(LineExplanation::new(
            "Lines 13-24",
            "Old Kaspar took it from the boy,\n\
             Who stood expectant by;\n\
             And then the old man shook his head,\n\
             And, with a natural sigh,\n\
             ''Tis some poor fellow's skull,' said he,\n\
             'Who fell in the great victory.'\n\
             'I find them in the garden,\n\
             For there's many here about;\n\
             And often when I go to plough,\n\
             The ploughshare turns them out!\n\
             For many thousand men,' said he,\n\
             'Were slain in that great victory.'",
            "The toy is a skull. Kaspar's sigh is 'natural', for such finds \
             are routine here: the garden and fields are full of the dead, \
             and ploughing regularly brings them up. The horror is stated \
             flatly, and each statement ends by leaning on the same formula, \
             the great victory.",
        ))
        .with_line_explanation(LineExplanation::new(
            "Lines 25-36",
            "'Now tell us what 'twas all about,'\n\
             Young Peterkin, he cries;\n\
             And little Wilhelmine looks up\n\
             With wonder-waiting eyes;\n\
             'Now tell us all about the war,\n\
             And what they fought each other for.'\n\
             'It was the English,' Kaspar cried,\n\
             'Who put the French to rout;\n\
             But what they fought each other for,\n\
             I could not well make out;\n\
             But everybody said,' quoth he,\n\
             'That 'twas a famous victory.'",
            "The children ask the one question that matters: what was the \
             war for? Kaspar knows the result, the English routed the French, \
             but admits he never understood the cause. His authority is \
             secondhand: 'everybody said' it was a famous victory, so he says \
             so too.",
        ))
        .with_line_explanation(LineExplanation::new(
            "Lines 43-54",
            "'With fire and sword the country round\n\
             Was wasted far and wide,\n\
             And many a childing mother then,\n\
             And new-born baby died;\n\
             But things like that, you know, must be\n\
             At every famous victory.\n\
             They say it was a shocking sight\n\
             After the field was won;\n\
             For many thousand bodies here\n\
             Lay rotting in the sun;\n\
             But things like that, you know, must be\n\
             After a famous victory.",
            "Kaspar's catalogue of the war grows darker: the countryside \
             wasted, expectant mothers and newborns dead, thousands of \
             corpses rotting after the field was won. Twice he waves it away \
             with 'things like that, you know, must be', the voice of a man \
             who has inherited acceptance along with the story.",
        ))
        .with_line_explanation(LineExplanation::new(
            "Lines 55-66",
            "'Great praise the Duke of Marlbro' won,\n\
             And our good Prince Eugene.'\n\
             'Why, 'twas a very wicked thing!'\n\
             Said little Wilhelmine.\n\
             'Nay... nay... my little girl,' quoth he,\n\
             'It was a famous victory.'\n\
             'And everybody praised the Duke\n\
             Who this great fight did win.'\n\
             'But what good came of it at last?'\n\
             Quoth little Peterkin.\n\
             'Why, that I cannot tell,' said he,\n\
             'But 'twas a famous victory.'",
            "The children deliver their verdicts: Wilhelmine calls the thing \
             wicked outright, and Peterkin asks what good came of it. Kaspar \
             can answer neither, only correct the girl and confess to the boy \
             that he cannot tell. The refrain closes the poem as an empty \
             phrase, all that remains of the famous victory.",
        ))
        .with_mcq(
            Mcq::new(
                "What had Peterkin found beside the rivulet?",
                [
                    "A cannon ball",
                    "A poor fellow's skull",
                    "A rusted sword",
                    "A smooth river stone",
                ],
                1,
            )
            .with_explanation(
                "Kaspar identifies the large, smooth, round object: ''Tis some \
                 poor fellow's skull... Who fell in the great victory.'",
            ),
        )
        .with_mcq(
            Mcq::new(
                "According to Kaspar, who put whom to rout at Blenheim?",
                [
                    "The French put the English to rout",
                    "The English put the French to rout",
                    "The Prussians put the Austrians to rout",
                    "He refuses to say",
                ],
                1,
            )
            .with_explanation("'It was the English,' Kaspar cried, 'Who put the French to rout'."),
        )
        .with_mcq(
            Mcq::new(
                "What happened to Kaspar's father during the war?",
                [
                    "His dwelling was burnt and he was forced to fly",
                    "He fell fighting in the battle",
                    "He was taken prisoner by the French",
                    "He guided the Duke across the stream",
                ],
                0,
            )
            .with_explanation(
                "'They burnt his dwelling to the ground, / And he was forced \
                 to fly', leaving with wife and child and nowhere to rest.",
            ),
        )
        .with_mcq(
            Mcq::new(
                "Which phrase does Kaspar fall back on throughout the poem?",
                [
                    "'A famous victory'",
                    "'A shocking sight'",
                    "'A wicked thing'",
                    "'A quiet evening'",
                ],
                0,
            )
            .with_explanation(
                "Every justification ends in the same borrowed formula, which \
                 the poem empties out a little more at each return.",
            ),
        )
        .with_mcq(
            Mcq::new(
                "Who calls the battle 'a very wicked thing'?",
                [
                    "Peterkin",
                    "Old Kaspar",
                    "Wilhelmine",
                    "The Duke of Marlborough",
                ],
                2,
            )
            .with_explanation(
                "Little Wilhelmine's blunt judgement draws only Kaspar's \
                 'Nay... nay... my little girl'.",
            ),
        )
        .with_mcq(
            Mcq::new(
                "What is Kaspar's answer when Peterkin asks what good came of the battle?",
                [
                    "He lists the spoils England won",
                    "He says he cannot tell",
                    "He credits Prince Eugene's genius",
                    "He blames the French for starting it",
                ],
                1,
            )
            .with_explanation(
                "'Why, that I cannot tell,' said he, / 'But 'twas a famous \
                 victory.' The admission is the poem's last word on war.",
            ),
        )
        .with_passage(
            ComprehensionPassage::new(
                "blenheim-the-skull",
                "Old Kaspar took it from the boy,\n\
                 Who stood expectant by;\n\
                 And then the old man shook his head,\n\
                 And, with a natural sigh,\n\
                 ''Tis some poor fellow's skull,' said he,\n\
                 'Who fell in the great victory.'\n\
                 'I find them in the garden,\n\
                 For there's many here about;\n\
                 And often when I go to plough,\n\
                 The ploughshare turns them out!\n\
                 For many thousand men,' said he,\n\
                 'Were slain in that great victory.'",
            )
            .with_question(
                "What does the word 'natural' in 'a natural sigh' suggest about Kaspar's world?",
                "Finding skulls is so common where he lives that his sadness \
                 has become habit. The war's dead are part of the landscape, \
                 turned up as casually as stones by the plough.",
            )
            .with_question(
                "How does the poet make the skull's discovery more disturbing by delaying its naming?",
                "For a whole stanza it is only 'something large and round', a \
                 plaything. When Kaspar names it, the innocent game and the \
                 mass death beneath the fields collide in a single image.",
            )
            .with_question(
                "What irony lies in the phrase 'the great victory' in this passage?",
                "Each mention of greatness is attached to evidence of waste: \
                 a dead man's skull, thousands slain. The adjective praises \
                 what the facts condemn.",
            ),
        )
        .with_passage(
            ComprehensionPassage::new(
                "blenheim-what-good",
                "'And everybody praised the Duke\n\
                 Who this great fight did win.'\n\
                 'But what good came of it at last?'\n\
                 Quoth little Peterkin.\n\
                 'Why, that I cannot tell,' said he,\n\
                 'But 'twas a famous victory.'",
            )
            .with_question(
                "Why is it significant that the question about the war's good comes from a child?",
                "Peterkin has inherited no opinions, so he asks what the \
                 grown-ups have stopped asking. Innocence cuts straight to \
                 the question fame has buried.",
            )
            .with_question(
                "What does Kaspar's 'I cannot tell' concede, and what does he refuse to concede?",
                "He concedes that he knows no good that came of the battle, \
                 yet he will not surrender the verdict of fame; the refrain \
                 follows as if it settled the matter.",
            )
            .with_question(
                "How does ending the poem on the refrain complete its irony?",
                "By now the phrase has been set against burnt homes, dead \
                 mothers and rotting bodies. Left standing alone as the \
                 final line, 'a famous victory' praises itself into \
                 meaninglessness.",
            ),
        )
        .with_device(LiteraryDevice::new(
            "Irony",
            "But 'twas a famous victory",
            "The refrain's praise is contradicted by everything Kaspar \
             actually reports; repetition empties the word 'famous' of \
             meaning.",
        ))
        .with_device(LiteraryDevice::new(
            "Imagery",
            "For many thousand bodies here / Lay rotting in the sun",
            "The plain, unflinching picture of the battlefield after the \
             fight undercuts every mention of glory.",
        ))
        .with_device(LiteraryDevice::new(
            "Repetition",
            "things like that, you know, must be",
            "Kaspar's formula of acceptance recurs like a shrug, showing how \
             ordinary people are taught to excuse the costs of war.",
        ))
        .with_device(LiteraryDevice::new(
            "Ballad form",
            "It was a summer evening, / Old Kaspar's work was done",
            "Simple metre, rhyme and dialogue give the poem a folk-tale \
             surface, against which its grim matter stands out sharply.",
        ))
        .with_character(CharacterNote::new(
            "Old Kaspar",
            "A farmer living where the battle was fought. Kindly but \
             incurious, he hands down the verdict of fame he inherited, \
             repeating 'a famous victory' for horrors he cannot explain.",
        ))
        .with_character(CharacterNote::new(
            "Peterkin",
            "Kaspar's grandson. He finds the skull by the rivulet and asks \
             the poem's central question: what good came of the battle at \
             last?",
        ))
        .with_character(CharacterNote::new(
            "Wilhelmine",
            "Kaspar's granddaughter. She looks up 'with wonder-waiting eyes' \
             and passes the plainest judgement in the poem: ''twas a very \
             wicked thing'.",
        ))
        .with_quotes([
            "But what good came of it at last? / Quoth little Peterkin.",
            "Why, that I cannot tell, said he, / But 'twas a famous victory.",
            "It was the English... Who put the French to rout; / But what they fought each other for, / I could not well make out",
        ])
}

fn the_bangle_sellers() -> LiteraryWork {
    LiteraryWork::new("the-bangle-sellers", "The Bangle Sellers", WorkKind::Poem)
        .with_author("Sarojini Naidu")
        .with_summary(
            "Bangle sellers carry their shining loads to the temple fair, \
             crying their wares. Each colour of bangle suits a stage of an \
             Indian woman's life: the silver and blue of maidenhood, the \
             sunlit gold of the bride, the purple and grey of fruitful \
             middle age.",
        )
        .with_detailed_summary(
            "The poem is the bangle sellers' own song. They present their \
             'rainbow-tinted circles of light' as lustrous tokens of radiant \
             lives, meant for happy daughters and happy wives. The stanzas \
             then sort the colours by the life they fit: for the maiden, \
             silver and blue like mountain mist, flushed like dreaming buds; \
             for the bride, bangles like fields of sunlit corn and like the \
             flame of her marriage fire, tinkling like her laughter and \
             tears; for the woman who has journeyed through life midway, \
             purple and gold-flecked grey, the colours of one who has reared \
             sons, served her household and worships at her husband's side. \
             Through the sellers' cry the poem celebrates the traditional \
             arc of an Indian woman's life, with the bangle as its symbol at \
             every turn.",
        )
        .with_themes([
            "Stages of an Indian woman's life",
            "Tradition and ritual",
            "Colour and symbolism",
            "Domestic happiness",
        ])
        .with_key_points([
            "From Naidu's 1912 collection The Bird of Time; four six-line stanzas of rhyming couplets.",
            "The bangle is the organising symbol: its colours map maidenhood, bridehood and motherhood.",
            "The sellers call their wares 'lustrous tokens of radiant lives', merchandise raised to emblem.",
            "Nature supplies the comparisons throughout: mist, buds, corn, flame and leaf.",
        ])
        .with_line_explanation(LineExplanation::new(
            "Stanza 1",
            "Bangle sellers are we who bear\n\
             Our shining loads to the temple fair...\n\
             Who will buy these delicate, bright\n\
             Rainbow-tinted circles of light?\n\
             Lustrous tokens of radiant lives,\n\
             For happy daughters and happy wives.",
            "The sellers announce themselves and their destination, the \
             temple fair, and turn their sales cry into poetry: the bangles \
             are delicate circles of light in rainbow colours, shining \
             tokens of the radiant lives of the daughters and wives who will \
             wear them.",
        ))
        .with_line_explanation(LineExplanation::new(
            "Stanza 2",
            "Some are meet for a maiden's wrist,\n\
             Silver and blue as the mountain mist,\n\
             Some are flushed like the buds that dream\n\
             On the tranquil brow of a woodland stream,\n\
             Some are aglow with the bloom that cleaves\n\
             To the limpid glory of new born leaves.",
            "The maiden's bangles take their colours from untouched nature: \
             silver-blue like mist on the mountains, pink like dreaming buds \
             beside a calm stream, glowing like the bloom on brand-new \
             leaves. Everything suggests freshness, promise and a life still \
             ahead.",
        ))
        .with_line_explanation(LineExplanation::new(
            "Stanza 3",
            "Some are like fields of sunlit corn,\n\
             Meet for a bride on her bridal morn,\n\
             Some, like the flame of her marriage fire,\n\
             Or, rich with the hue of her heart's desire,\n\
             Tinkling, luminous, tender, and clear,\n\
             Like her bridal laughter and bridal tear.",
            "The bride's bangles are yellow as sunlit corn and red as the \
             sacred marriage fire, rich as her heart's desire. Their sound \
             and light are matched to her mixed emotions on the wedding \
             morning, laughter and tears together.",
        ))
        .with_line_explanation(LineExplanation::new(
            "Stanza 4",
            "Some are purple and gold flecked grey\n\
             For she who has journeyed through life midway,\n\
             Whose hands have cherished, whose love has blest,\n\
             And cradled fair sons on her faithful breast,\n\
             And serves her household in fruitful pride,\n\
             And worships the gods at her husband's side.",
            "For the woman in middle life the colours deepen to purple and \
             grey flecked with gold. Her bangles honour what she has done: \
             cherished and blessed her family, raised sons, kept her \
             household in fruitful pride and shared in worship beside her \
             husband.",
        ))
        .with_device(LiteraryDevice::new(
            "Symbolism",
            "Rainbow-tinted circles of light",
            "The bangles stand for the stages of a woman's life; each \
             stanza's colours encode an age and its duties.",
        ))
        .with_device(LiteraryDevice::new(
            "Simile",
            "Silver and blue as the mountain mist",
            "The maiden's bangles borrow the cool, untouched colours of \
             distant mist, fixing her youth in a single comparison.",
        ))
        .with_device(LiteraryDevice::new(
            "Imagery",
            "Some are like fields of sunlit corn",
            "Ripe, golden imagery surrounds the bride, suggesting warmth, \
             plenty and the harvest of a new life beginning.",
        ))
        .with_device(LiteraryDevice::new(
            "Alliteration",
            "Like her bridal laughter and bridal tear",
            "The echoing 'l' and repeated 'bridal' bind the bride's joy and \
             sorrow into one musical line.",
        ))
        .with_quotes([
            "Who will buy these delicate, bright / Rainbow-tinted circles of light?",
            "Lustrous tokens of radiant lives, / For happy daughters and happy wives.",
            "Some, like the flame of her marriage fire",
        ])
}
