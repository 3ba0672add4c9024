//! The prose works on the reading list.
//!
//! All texts are public domain; extracts are quoted from the standard
//! published versions (Andersen in the Paull translation, Seattle in the
//! Henry A. Smith text).

use crate::works::{
    CharacterNote, ComprehensionPassage, LiteraryDevice, LiteraryWork, Mcq, WorkKind,
};

/// Every story, in syllabus order.
pub(super) fn stories() -> Vec<LiteraryWork> {
    vec![
        an_angel_in_disguise(),
        hearts_and_hands(),
        the_little_match_girl(),
        chief_seattles_speech(),
    ]
}

fn an_angel_in_disguise() -> LiteraryWork {
    LiteraryWork::new("an-angel-in-disguise", "An Angel in Disguise", WorkKind::Story)
        .with_author("T. S. Arthur")
        .with_summary(
            "When a destitute woman dies, her two older children are taken in \
             by villagers, but no one wants the crippled youngest, Maggie. \
             The wheelwright Joe Thompson carries her home to his sour-\
             tempered wife, and the helpless child slowly transforms their \
             loveless house into a home.",
        )
        .with_detailed_summary(
            "The story opens on a scene of judgement: a woman scorned by the \
             village for her drinking dies on her own threshold, leaving \
             three children. Pity, stronger than contempt once she is dead, \
             finds places for two of them. Farmer Jones takes John, the \
             sturdy boy; Mrs. Ellis takes Kate, old enough to be made useful. \
             But Maggie, bedridden since a fall injured her spine, is wanted \
             by nobody; the poorhouse is named as the only place for her. \
             Left alone as the burial party leaves, she is carried off on an \
             impulse of tenderness by Joe Thompson, the childless \
             wheelwright, whose wife meets him at the door in anger. Joe asks \
             her only to look at the child kindly and to remember the words \
             of the Savior about little children; he proposes to keep her a \
             day or two until a place is found. No place is ever sought. \
             Maggie's patient sweetness disarms Jane Thompson within a day, \
             and the sickly child becomes the light of the house, precious to \
             both. The story closes on its title: the burden nobody would \
             carry was an angel in disguise.",
        )
        .with_themes([
            "Compassion",
            "The transforming power of love",
            "Poverty and charity",
            "Family",
        ])
        .with_key_points([
            "A Victorian moral tale by T. S. Arthur, first published in the 1850s.",
            "The opening sentence names the forces that destroyed the mother: idleness, vice and intemperance.",
            "Joe's appeal to his wife rests on scripture, not argument; he asks for kindness a day at a time.",
            "Jane Thompson's change of heart is the story's real event: caring for Maggie is what softens her.",
            "The title is explained only by the whole story: the helpless child is the blessing the household lacked.",
        ])
        .with_mcq(
            Mcq::new(
                "Why was Maggie left behind when her brother and sister were taken in?",
                [
                    "She refused to leave her mother's house",
                    "A fall had injured her spine and she could not walk",
                    "Farmer Jones thought her too young to work",
                    "She was already promised to the poorhouse",
                ],
                1,
            )
            .with_explanation(
                "Two years earlier she had fallen from a window; bedridden \
                 ever since, she was of no 'use' to any household, and only \
                 the poorhouse was suggested for her.",
            ),
        )
        .with_mcq(
            Mcq::new(
                "What was Joe Thompson's trade?",
                ["Blacksmith", "Wheelwright", "Farmer", "Storekeeper"],
                1,
            ),
        )
        .with_mcq(
            Mcq::new(
                "How is Mrs. Thompson described before Maggie's arrival?",
                [
                    "A gentle, motherly woman",
                    "A childless wife with a sour temper",
                    "An invalid confined to her room",
                    "The most charitable woman in the village",
                ],
                1,
            )
            .with_explanation(
                "She 'was not a woman of saintly temper'; the childless house \
                 had grown hard, and Joe expects a storm when he carries \
                 Maggie in.",
            ),
        )
        .with_mcq(
            Mcq::new(
                "With what does Joe answer his wife's objections on the first night?",
                [
                    "He reminds her of the Savior's words about little children",
                    "He promises her a servant's wages for the trouble",
                    "He threatens to leave the house with the child",
                    "He says the doctor ordered the child into his care",
                ],
                0,
            )
            .with_explanation(
                "Joe asks Jane to be kind to the child and to remember what \
                 the Savior said of little children, adding that he only \
                 means to keep her until a place is found.",
            ),
        )
        .with_mcq(
            Mcq::new(
                "What change does Maggie bring to the Thompson household?",
                [
                    "She brings an inheritance that makes them rich",
                    "Her gentleness fills the childless home with love",
                    "Her illness drains and embitters the couple",
                    "She reunites them with her brother and sister",
                ],
                1,
            )
            .with_explanation(
                "The sweetness of the patient invalid wins Jane over within a \
                 day, and the house that had no child gains its light.",
            ),
        )
        .with_mcq(
            Mcq::new(
                "Why is Maggie called 'an angel in disguise'?",
                [
                    "She appears to Joe in a dream",
                    "Her presence turns a loveless house into a loving home",
                    "She performs a miracle of healing",
                    "She sings in the church choir",
                ],
                1,
            )
            .with_explanation(
                "The blessing arrives disguised as a burden: the child nobody \
                 wanted is the one who brings love into the Thompsons' home.",
            ),
        )
        .with_passage(
            ComprehensionPassage::new(
                "angel-the-opening",
                "Idleness, vice, and intemperance had done their miserable \
                 work, and the dead mother lay cold and still amid her \
                 wretched children. She had fallen upon the threshold of her \
                 own door in a drunken fit, and died in the presence of her \
                 frightened little ones.",
            )
            .with_question(
                "What attitude does the opening sentence take towards the dead mother?",
                "It passes a stern moral judgement: her ruin is credited to \
                 idleness, vice and intemperance. Yet by calling the children \
                 'wretched' and 'frightened' it directs the reader's pity \
                 where the story will keep it, on the innocent.",
            )
            .with_question(
                "Why does the story begin with the mother's death rather than with Maggie?",
                "The death creates the problem the village must solve, the \
                 disposal of three children. Maggie emerges as the one case \
                 charity cannot comfortably settle, which is exactly the test \
                 the story is built on.",
            )
            .with_question(
                "What does the phrase 'done their miserable work' suggest about the forces named?",
                "Idleness, vice and intemperance are treated as agents that \
                 labour towards ruin. The abstraction makes the mother as \
                 much a victim of her habits as their author.",
            ),
        )
        .with_passage(
            ComprehensionPassage::new(
                "angel-joes-plea",
                "'Look at her kindly, Jane; speak to her kindly,' said Joe. \
                 'Think of her dead mother, and the loneliness, the pain, the \
                 sorrow that must be on all her coming life.' The softness of \
                 his heart gave unwonted eloquence to his lips.",
            )
            .with_question(
                "What is Joe actually asking of his wife, and why is the request so modest?",
                "Only that she look and speak kindly. Joe knows Jane cannot \
                 be argued into charity, but might be led into it one small \
                 kindness at a time; the modesty of the request is its \
                 shrewdness.",
            )
            .with_question(
                "Explain 'unwonted eloquence'. What made Joe eloquent?",
                "'Unwonted' means unaccustomed: the plain wheelwright does \
                 not usually speak movingly. Feeling, not skill, supplies the \
                 words; his softness of heart becomes persuasive speech.",
            )
            .with_question(
                "How does this moment prepare for Jane's transformation?",
                "Joe sets before her the child's whole future of loneliness \
                 and pain. Once Jane has truly looked at Maggie, pity does \
                 the rest; the story's hinge is this redirection of her \
                 gaze.",
            ),
        )
        .with_device(LiteraryDevice::new(
            "Metaphor",
            "An angel in disguise",
            "The title figures the unwanted child as a heavenly gift whose \
             true nature is hidden under helplessness and poverty.",
        ))
        .with_device(LiteraryDevice::new(
            "Contrast",
            "Joe's tenderness against Jane's 'vinegar' temper",
            "The couple embody the story's two possible answers to the \
             helpless; the plot is the victory of one over the other.",
        ))
        .with_device(LiteraryDevice::new(
            "Personification",
            "Idleness, vice, and intemperance had done their miserable work",
            "The vices act as labourers of ruin, opening the story with \
             judgement delivered in a single stroke.",
        ))
        .with_character(CharacterNote::new(
            "Maggie",
            "The youngest of the three orphans, bedridden since a fall broke \
             her spine. Patient, affectionate and uncomplaining, she is the \
             'angel' of the title.",
        ))
        .with_character(CharacterNote::new(
            "Joe Thompson",
            "A childless wheelwright with a rough trade and a soft heart. His \
             impulsive kindness at the hovel door sets the story in motion.",
        ))
        .with_character(CharacterNote::new(
            "Jane Thompson",
            "Joe's wife, sharp-tongued and sour from a childless marriage. \
             Her softening under Maggie's influence is the story's true \
             transformation.",
        ))
        .with_character(CharacterNote::new(
            "John and Kate",
            "Maggie's older brother and sister, taken in by Farmer Jones and \
             Mrs. Ellis for the work they can do, a charity with an eye to \
             profit.",
        ))
        .with_quotes([
            "Idleness, vice, and intemperance had done their miserable work",
            "'Look at her kindly, Jane; speak to her kindly,' said Joe.",
            "The softness of his heart gave unwonted eloquence to his lips.",
        ])
}

fn hearts_and_hands() -> LiteraryWork {
    LiteraryWork::new("hearts-and-hands", "Hearts and Hands", WorkKind::Story)
        .with_author("O. Henry")
        .with_summary(
            "On an eastbound train, Miss Fairchild recognises an old \
             acquaintance, Mr. Easton, handcuffed to a glum stranger. The \
             stranger lets her believe Easton is a marshal escorting a \
             prisoner; only the story's last line lets the reader see who \
             wore the cuffs for which reason.",
        )
        .with_detailed_summary(
            "Two men board the crowded eastbound coach handcuffed together: \
             one young and handsome, the other ruffled and glum. The elegant \
             Miss Fairchild greets the young man, Mr. Easton, with delight, \
             then sees the handcuffs and falters. The glum man smoothly \
             interposes: he asks her to speak a word for him to 'the marshal', \
             explaining that he is being taken to Leavenworth prison for \
             counterfeiting. Relieved, she talks on, confiding that she loves \
             the West, while Easton speaks vaguely of his 'position' and its \
             duties. The glum man then breaks in again, it is time for his \
             pipe in the smoker, and the pair leave. Two passengers who \
             overheard discuss the 'marshal': one remarks he seems young for \
             the office, and the other asks whether he has ever known an \
             officer to handcuff a prisoner to his right hand. The unturned \
             key of the story turns: the real marshal was the glum man, who \
             invented the lie to spare Easton shame before the girl.",
        )
        .with_themes([
            "Appearances and reality",
            "Kindness and tact",
            "Shame and dignity",
            "Irony of fate",
        ])
        .with_key_points([
            "A classic O. Henry surprise ending, prepared in plain sight by the handcuff detail.",
            "The title pairs the language of feeling ('hearts') with the instrument of law ('hands' in cuffs).",
            "The marshal's lie is an act of tact; the story's kindest deed is a deception.",
            "Easton's vague talk of money and position hints at the need that led him to crime.",
        ])
        .with_mcq(
            Mcq::new(
                "How were the two men linked when they entered the coach?",
                [
                    "They were handcuffed together",
                    "They walked arm in arm",
                    "They carried one valise between them",
                    "They wore matching badges",
                ],
                0,
            ),
        )
        .with_mcq(
            Mcq::new(
                "For what crime is the prisoner being taken to Leavenworth?",
                ["Train robbery", "Counterfeiting", "Cattle rustling", "Embezzlement"],
                1,
            )
            .with_explanation(
                "'Seven years for counterfeiting', the glum-faced man says, \
                 attaching the sentence to himself.",
            ),
        )
        .with_mcq(
            Mcq::new(
                "Who does Miss Fairchild believe the marshal to be?",
                [
                    "The glum-faced man",
                    "Mr. Easton",
                    "The train conductor",
                    "An ambassador she once knew",
                ],
                1,
            )
            .with_explanation(
                "The glum man's interruption plants the belief: he begs her \
                 to put in a word with 'the marshal', meaning Easton.",
            ),
        )
        .with_mcq(
            Mcq::new(
                "How does the glum-faced man spare Easton embarrassment?",
                [
                    "He claims to be the prisoner himself",
                    "He hides the handcuffs under his coat",
                    "He tells Miss Fairchild they are actors",
                    "He pretends to be asleep",
                ],
                0,
            ),
        )
        .with_mcq(
            Mcq::new(
                "What detail finally gives the truth away?",
                [
                    "An officer never handcuffs a prisoner to his right hand",
                    "Easton's ticket is marked for Leavenworth",
                    "The glum man carries the only key",
                    "Miss Fairchild recognises the marshal's badge",
                ],
                0,
            )
            .with_explanation(
                "The overheard remark asks the reader to re-examine the \
                 seating: the right hand bound was Easton's, so Easton was \
                 the prisoner.",
            ),
        )
        .with_passage(
            ComprehensionPassage::new(
                "hearts-the-meeting",
                "At Denver there was an influx of passengers into the coaches \
                 on the eastbound B. & M. express. In one coach there sat a \
                 very pretty young woman dressed in elegant taste and \
                 surrounded by all the luxurious comforts of an experienced \
                 traveler. Among the newcomers were two young men, one of \
                 handsome presence with a bold, frank countenance and manner; \
                 the other a ruffled, glum-faced person, heavily built and \
                 roughly dressed. The two were handcuffed together.",
            )
            .with_question(
                "How does the narrator's description steer our first judgement of the two men?",
                "Handsome, bold and frank against ruffled, glum and rough: \
                 the contrast invites the conventional reading that the \
                 well-favoured man must be the officer and the coarse one the \
                 criminal. The story exists to punish that inference.",
            )
            .with_question(
                "Why is the final short sentence, 'The two were handcuffed together', so effective?",
                "After leisurely portraits, the blunt fact arrives without \
                 explanation. The cuffs join the two men into a single puzzle \
                 the rest of the story pretends to solve one way and actually \
                 solves the other.",
            )
            .with_question(
                "What does the description of Miss Fairchild establish about her world?",
                "Elegant taste and luxurious comforts mark her as moneyed and \
                 sheltered, exactly the audience before whom Easton cannot \
                 bear to appear as what he is.",
            ),
        )
        .with_passage(
            ComprehensionPassage::new(
                "hearts-the-last-word",
                "The two passengers in a seat near by had heard most of the \
                 conversation. Said one of them: 'That marshal's a good sort \
                 of chap. Some of these Western fellows are all right.' \
                 'Pretty young to hold an office like that, isn't he?' asked \
                 the other. 'Young!' exclaimed the first speaker, 'why—Oh! \
                 didn't you catch on? Say—did you ever know an officer to \
                 handcuff a prisoner to his right hand?'",
            )
            .with_question(
                "Why does O. Henry give the revelation to two bystanders rather than the narrator?",
                "The narrator never lies, but never explains either. Letting \
                 chance observers voice the key detail keeps the trick fair \
                 and makes the reader do the final step of detection.",
            )
            .with_question(
                "What exactly does the right-hand detail prove?",
                "An officer keeps his right hand, his gun hand, free and \
                 cuffs the prisoner to his left. Since the young man's right \
                 hand was bound, he was the prisoner and the glum man the \
                 marshal.",
            )
            .with_question(
                "How does the closing question change the meaning of the glum man's earlier behaviour?",
                "His interruptions, first taking the crime on himself, then \
                 inventing the trip to the smoker, are revealed as deliberate \
                 tact: the rough-looking lawman stage-managed the whole scene \
                 to spare his prisoner's feelings.",
            ),
        )
        .with_device(LiteraryDevice::new(
            "Dramatic irony",
            "Miss Fairchild chats warmly with 'the marshal'",
            "Once the end is known, every line of her conversation reads \
             differently; the reader's second pass shares the knowledge the \
             characters withheld.",
        ))
        .with_device(LiteraryDevice::new(
            "Surprise ending",
            "did you ever know an officer to handcuff a prisoner to his right hand?",
            "The reversal arrives in the last sentence, resting on a detail \
             shown in the first scene and left unexplained.",
        ))
        .with_device(LiteraryDevice::new(
            "Symbolism",
            "Hearts and hands",
            "The title sets feeling against circumstance: hands are bound by \
             the law while hearts, the girl's, the marshal's, stay free to \
             be kind.",
        ))
        .with_device(LiteraryDevice::new(
            "Characterization by contrast",
            "one of handsome presence... the other a ruffled, glum-faced person",
            "The paired portraits bait the reader into judging by \
             appearances, the exact error the story is about.",
        ))
        .with_character(CharacterNote::new(
            "Mr. Easton",
            "A handsome young man from Miss Fairchild's Washington circle, \
             gone West and gone wrong: he is being escorted to Leavenworth \
             for counterfeiting, and lets a kinder man's lie stand.",
        ))
        .with_character(CharacterNote::new(
            "Miss Fairchild",
            "An elegant, warm-hearted young traveler who accepts appearances \
             at face value; her belief in Easton's 'position' is never \
             corrected.",
        ))
        .with_character(CharacterNote::new(
            "The marshal",
            "The ruffled, glum-faced officer who invents a criminal record \
             for himself to spare his prisoner humiliation, the story's \
             quiet hero.",
        ))
        .with_quotes([
            "The two were handcuffed together.",
            "Did you ever know an officer to handcuff a prisoner to his right hand?",
        ])
}

fn the_little_match_girl() -> LiteraryWork {
    LiteraryWork::new(
        "the-little-match-girl",
        "The Little Match Girl",
        WorkKind::Story,
    )
    .with_author("Hans Christian Andersen")
    .with_summary(
        "On the freezing last evening of the year, a barefoot girl who dares \
         not go home unsold strikes her matches one by one. Each flame shows \
         her a vision, a warm stove, a feast, a Christmas tree, and at last \
         her dead grandmother, who carries her away where there is no more \
         cold or hunger.",
    )
    .with_detailed_summary(
        "A poor girl wanders the snowy streets on New Year's Eve, \
         bareheaded and barefoot, her slippers lost and her matches unsold. \
         Home promises no shelter, her father will beat her for bringing \
         nothing, and the wind whistles through their garret anyway. Huddled \
         in a corner between two houses, she strikes a match to warm her \
         fingers and sees a great iron stove; it goes out. A second shows \
         her a roast goose that leaps from its dish; a third, a Christmas \
         tree whose lights rise until they become stars, and a star falls. \
         Someone is dying, she thinks, for her dead grandmother had told her \
         a falling star means a soul going up to God. In the next match's \
         light the grandmother herself appears, clear and shining and mild, \
         and the child strikes the whole bundle at once to keep her. The \
         grandmother takes her up, and they fly where there is neither cold \
         nor hunger nor care. In the cold dawn the townspeople find the \
         little body with burnt matches around it and a smile on its face; \
         no one knows what beauty she had seen, nor into what glory she had \
         entered with her grandmother on New Year's Day.",
    )
    .with_themes([
        "Poverty and indifference",
        "Hope and imagination",
        "Death as release",
        "Childhood innocence",
    ])
    .with_key_points([
        "Published by Andersen in 1845; the familiar English text is H. B. Paull's translation.",
        "The visions escalate from bodily needs to love: warmth, food, festivity, the grandmother.",
        "Every match that dies returns the child to a colder reality; the pattern gives the story its rhythm.",
        "The ending is double: a frozen body judged by passers-by, and a glory none of them can see.",
        "The falling star links the third vision to the ending before the reader knows it.",
    ])
    .with_mcq(
        Mcq::new(
            "On what evening does the story take place?",
            [
                "Christmas Eve",
                "The last evening of the year",
                "Easter eve",
                "Midsummer night",
            ],
            1,
        ),
    )
    .with_mcq(
        Mcq::new(
            "Why does the girl not go home?",
            [
                "She has lost her way in the snow",
                "She has sold nothing and fears her father's blows",
                "Her home is locked against her",
                "She is searching for her grandmother",
            ],
            1,
        )
        .with_explanation(
            "She had sold no matches and earned not a penny, and home was \
             scarcely warmer than the street in any case.",
        ),
    )
    .with_mcq(
        Mcq::new(
            "What does the girl see in the light of the first match?",
            [
                "A great iron stove",
                "A roast goose",
                "A lighted Christmas tree",
                "Her grandmother",
            ],
            0,
        ),
    )
    .with_mcq(
        Mcq::new(
            "What did the grandmother say a falling star means?",
            [
                "A wish is about to be granted",
                "A soul is going up to God",
                "A storm is coming",
                "The old year is ending",
            ],
            1,
        ),
    )
    .with_mcq(
        Mcq::new(
            "Why does the girl strike the whole bundle of matches at once?",
            [
                "To warm her frozen feet",
                "To keep her grandmother from vanishing",
                "To light her way home",
                "To signal the passers-by",
            ],
            1,
        )
        .with_explanation(
            "Each vision had vanished with its match; she burns everything \
             she has to hold the one vision she cannot lose.",
        ),
    )
    .with_passage(
        ComprehensionPassage::new(
            "match-girl-opening",
            "It was terribly cold and nearly dark on the last evening of the \
             old year, and the snow was falling fast. In the cold and the \
             darkness, a poor little girl, with bare head and naked feet, \
             roamed through the streets.",
        )
        .with_question(
            "How does the opening sentence set the story's two antagonists in place?",
            "Cold and darkness are named before the child is; they are the \
             forces she will spend the story contending with, and they frame \
             her appearance in the second sentence.",
        )
        .with_question(
            "What is the effect of 'bare head and naked feet' on our first sight of the girl?",
            "The details make her poverty bodily and immediate. She is \
             introduced not by name or family but by what she lacks, which \
             is how the indifferent town sees her too.",
        )
        .with_question(
            "Why might Andersen set the story on the year's last evening rather than any winter night?",
            "The threshold of the new year sharpens the contrast between the \
             celebrating world behind lit windows and the child outside it, \
             and lets the ending place her entry 'into glory' on New Year's \
             Day.",
        ),
    )
    .with_passage(
        ComprehensionPassage::new(
            "match-girl-ending",
            "In the dawn of morning there lay the poor little one, with pale \
             cheeks and smiling mouth, leaning against the wall; she had \
             been frozen to death on the last evening of the year; and the \
             New-year's sun rose and shone upon a little corpse! ... No one \
             imagined what beautiful things she had seen, nor into what \
             glory she had entered with her grandmother, on New-year's day.",
        )
        .with_question(
            "What do the townspeople see, and what does the reader know that they cannot?",
            "They see a frozen child with burnt matches and guess she was \
             trying to warm herself. The reader has seen the visions and the \
             grandmother, so the smile they puzzle over is legible only to \
             us.",
        )
        .with_question(
            "How does the word 'glory' answer the word 'corpse' in this passage?",
            "The sentence holds both endings at once: the body in the \
             street and the soul's entry into glory. Andersen lets neither \
             cancel the other, which is the story's lasting discomfort.",
        )
        .with_question(
            "Is the ending a happy one? Give reasons from the text.",
            "For the child, release: no more cold, hunger or fear, and \
             reunion with the one person who loved her. For the world that \
             let her freeze outside its lit windows, the ending is an \
             indictment; the smile on the corpse accuses everyone who walked \
             past.",
        ),
    )
    .with_character(CharacterNote::new(
        "The little match girl",
        "A nameless child street-seller, sent out unsold and unshod into \
         the snow. Her imagination, fed by the match flames, is the only \
         wealth she has.",
    ))
    .with_character(CharacterNote::new(
        "The grandmother",
        "The only person who was ever kind to the girl, dead before the \
         story opens. She returns in the final vision, 'clear and shining', \
         to carry the child away.",
    ))
    .with_character(CharacterNote::new(
        "The father",
        "Unseen but decisive: fear of his blows keeps the girl on the \
         street. He stands for the home that offers no refuge.",
    ))
    .with_quotes([
        "She had been frozen to death on the last evening of the year",
        "No one imagined what beautiful things she had seen, nor into what glory she had entered",
        "Someone is dying, thought the little girl, for her old grandmother... had told her that when a star falls, a soul was going up to God.",
    ])
}

fn chief_seattles_speech() -> LiteraryWork {
    LiteraryWork::new(
        "chief-seattles-speech",
        "Chief Seattle's Speech",
        WorkKind::Story,
    )
    .with_author("Chief Seattle")
    .with_summary(
        "Replying in 1854 to the American offer to buy his people's lands, \
         Chief Seattle sets the fading of his own nation against the \
         ambition of the newcomers, accepts the offer with conditions, and \
         promises that the land will never lose the presence of his dead.",
    )
    .with_detailed_summary(
        "The speech answers Governor Stevens' proposal that the tribes sell \
         their lands and retire to a reservation. Seattle begins with the \
         sky: changeless to the eye, yet it may change, as the white chief's \
         friendship may; his own words, he says, are like the stars that \
         never change. He recalls a time when his people covered the land \
         as waves cover a shell-paved floor, and does not mourn their \
         passing too soon nor blame the newcomers for hastening it, since \
         youth and age, the two races, are as different as day and night. \
         He weighs the white man's God against his own people's dead: one \
         race is written of and remembered, the other wanders unwept; yet \
         the dead of his people love the land that holds their ashes and \
         will never leave it. He accepts the offer on one condition, that \
         his people may visit the graves of their ancestors and friends, \
         and ends with a warning that is also a consolation: when the last \
         of his tribe has vanished, the shores and woods will still throng \
         with the invisible dead, and the white man will never be alone. \
         'There is no death, only a change of worlds.'",
    )
    .with_themes([
        "Reverence for the land",
        "The ebbing of a people",
        "The enduring presence of the dead",
        "Dignity in defeat",
    ])
    .with_key_points([
        "Delivered in 1854 in reply to Governor Isaac Stevens; the standard text is Henry A. Smith's 1887 reconstruction.",
        "Built on sustained natural imagery: sky, stars, tides, waves and returning seasons carry the argument.",
        "Seattle accepts the sale but attaches a condition: free access to the graves of his ancestors.",
        "The speech refuses both self-pity and reproach; its tone is elegiac, measured and unbowed.",
        "The closing promise reverses the power of the living and the dead: the land will remain thronged with his people.",
    ])
    .with_mcq(
        Mcq::new(
            "What prompted Chief Seattle's speech?",
            [
                "A declaration of war by the settlers",
                "An offer from Washington to buy his people's lands",
                "A dispute over fishing grounds",
                "An invitation to visit the Great White Chief",
            ],
            1,
        )
        .with_explanation(
            "The Big Chief at Washington 'sends us greetings of friendship \
             and goodwill' and offers to buy the lands, reserving enough for \
             the tribe to live comfortably.",
        ),
    )
    .with_mcq(
        Mcq::new(
            "To what does Seattle compare his own words?",
            [
                "The waves of the sea",
                "The stars that never change",
                "The wind over the prairie",
                "The returning seasons",
            ],
            1,
        )
        .with_explanation(
            "'My words are like the stars that never change': whatever he \
             promises, the white chief may rely on.",
        ),
    )
    .with_mcq(
        Mcq::new(
            "How does Seattle describe his people's former greatness?",
            [
                "They covered the land as waves cover a shell-paved floor",
                "They were countless as the stars of the sky",
                "They stood thick as the forest trees",
                "They moved like storm clouds over the mountains",
            ],
            0,
        ),
    )
    .with_mcq(
        Mcq::new(
            "What condition does Seattle attach to accepting the offer?",
            [
                "That his people keep their fishing rights forever",
                "That they may visit the graves of their ancestors and friends",
                "That the two peoples never live side by side",
                "That the reservation be chosen by the tribe",
            ],
            1,
        ),
    )
    .with_mcq(
        Mcq::new(
            "What does Seattle say about death at the close of the speech?",
            [
                "It is a long sleep from which none wake",
                "There is no death, only a change of worlds",
                "It comes soonest to the unjust",
                "It parts the two races forever",
            ],
            1,
        ),
    )
    .with_passage(
        ComprehensionPassage::new(
            "seattle-never-alone",
            "And when the last Red Man shall have perished, and the memory of \
             my tribe shall have become a myth among the White Men, these \
             shores will swarm with the invisible dead of my tribe... The \
             White Man will never be alone. Let him be just and deal kindly \
             with my people, for the dead are not powerless. Dead, did I \
             say? There is no death, only a change of worlds.",
        )
        .with_question(
            "In what sense will the white man 'never be alone'?",
            "The land itself will remain inhabited by Seattle's dead, who \
             love it and return to it. Ownership may pass; presence will \
             not. The comfort and the warning are the same fact.",
        )
        .with_question(
            "What force does the self-correction 'Dead, did I say?' carry?",
            "Seattle catches his own word and overturns it. By reframing \
             death as 'a change of worlds' he denies the finality on which \
             the buyers' victory rests, and closes the speech on his own \
             terms.",
        )
        .with_question(
            "How does 'Let him be just and deal kindly with my people' function as both plea and warning?",
            "It asks for justice in plain words, then supplies a motive that \
             is not sentiment but power: 'the dead are not powerless'. \
             Kindness is requested; consequence is implied.",
        ),
    )
    .with_device(LiteraryDevice::new(
        "Simile",
        "My words are like the stars that never change",
        "Seattle borrows the fixity of the stars for his promises, setting \
         native constancy against the changeable friendship of governments.",
    ))
    .with_device(LiteraryDevice::new(
        "Metaphor",
        "Day and night cannot dwell together",
        "The two peoples are figured as day and night, their difference \
         presented as natural fact rather than grievance.",
    ))
    .with_device(LiteraryDevice::new(
        "Personification",
        "Yonder sky that has wept tears of compassion upon my people",
        "The sky mourns with the tribe, enlisting the whole landscape in \
         the speech's grief and dignity.",
    ))
    .with_device(LiteraryDevice::new(
        "Rhetorical question",
        "Dead, did I say?",
        "The self-posed question lets Seattle correct the common word and \
         deliver his conclusion: only a change of worlds.",
    ))
    .with_quotes([
        "My words are like the stars that never change.",
        "The White Man will never be alone.",
        "There is no death, only a change of worlds.",
        "Let him be just and deal kindly with my people, for the dead are not powerless.",
    ])
}
