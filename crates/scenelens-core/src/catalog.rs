//! The social-event catalog — the concrete taxonomy Scenelens validates
//! against.
//!
//! Everything here is data handed to the generic machinery in
//! [`crate::schema`] and [`crate::validate`]; no vocabulary gets its own
//! validation or rendering code. Literal values are stored verbatim in
//! documents, so changing one is a breaking change for existing stores.

use crate::schema::{Field, TaxonomyNode};

// ─── Root ────────────────────────────────────────────────────────────────────

/// The root section of a scene analysis.
pub fn social_event_analysis() -> TaxonomyNode {
  TaxonomyNode::section(vec![
    Field::optional(
      "scene_id",
      "Stable identifier for the scene under analysis. Used as the \
       storage key when the caller does not supply one.",
      TaxonomyNode::Text,
    ),
    Field::optional(
      "perception_layer",
      "Raw signal processing: what is happening, before deciding why.",
      perception_layer(),
    ),
    Field::required(
      "comprehension_layer",
      "The observable status of the scene.",
      comprehension_layer(),
    ),
  ])
}

/// The four context blocks combined into one comprehension object.
pub fn comprehension_layer() -> TaxonomyNode {
  TaxonomyNode::section(vec![
    Field::required(
      "social_normative_context",
      "The rules, setting, and cultural framework of the scene.",
      social_normative_context(),
    ),
    Field::required(
      "relationship_power_dynamics",
      "The static bond between the agents before the interaction starts.",
      relationship_context(),
    ),
    Field::required(
      "emotional_state",
      "The agent's internal state and external display.",
      emotional_state(),
    ),
    Field::required(
      "communicative_intent",
      "The purpose, strategy, and content of the focal utterance.",
      communicative_intent(),
    ),
  ])
}

// ─── Perception layer ────────────────────────────────────────────────────────

pub fn perception_layer() -> TaxonomyNode {
  TaxonomyNode::section(vec![
    Field::required(
      "visual_cues",
      "Specific visual cues, e.g. 'Brow furrowed implies concern', \
       'Clenched fists implies anger'.",
      TaxonomyNode::seq(TaxonomyNode::Text),
    ),
    Field::required(
      "audio_cues",
      "Specific audio signals, e.g. 'Long pauses implies hesitation', \
       'Trembling voice implies fear'.",
      TaxonomyNode::seq(TaxonomyNode::Text),
    ),
    Field::required(
      "textual_cues",
      "Specific textual signals, e.g. ''Thank you' implies politeness'.",
      TaxonomyNode::seq(TaxonomyNode::Text),
    ),
    Field::required(
      "congruence_check",
      "Whether the visual, audio, and textual modalities agree.",
      TaxonomyNode::section(vec![
        Field::required(
          "status",
          "Overall alignment of the three modalities.",
          TaxonomyNode::choice(&[
            ("Congruent", "All modalities tell the same story."),
            ("Incongruent", "At least one modality contradicts the others."),
          ]),
        ),
        Field::required(
          "explanation",
          "Rationale for the congruence assessment.",
          TaxonomyNode::Text,
        ),
      ]),
    ),
    Field::required(
      "temporal_dynamics",
      "How the cues evolve over the course of the scene.",
      TaxonomyNode::section(vec![
        Field::required(
          "visual_change",
          "How visual cues evolve over time, e.g. 'Smile slowly turns \
           into a frown'.",
          TaxonomyNode::Text,
        ),
        Field::required(
          "audio_change",
          "How audio cues evolve over time, e.g. 'Rising pitch', \
           'Volume increases'.",
          TaxonomyNode::Text,
        ),
        Field::required(
          "textual_change",
          "How textual cues evolve over time.",
          TaxonomyNode::Text,
        ),
      ]),
    ),
  ])
}

// ─── Social-normative context ────────────────────────────────────────────────

pub fn social_normative_context() -> TaxonomyNode {
  TaxonomyNode::section(vec![
    Field::required(
      "permeability",
      "How strict is the filter for this interaction? Does it block \
       outsiders from entering, and private details from being shared?",
      TaxonomyNode::choice(&[
        ("Closed (Private)", "Outsiders and disclosures are filtered out."),
        ("Open (Public)", "Anyone may enter or observe."),
      ]),
    ),
    Field::required(
      "topology",
      "How are the agents grouped? A single unit, separate dyads, or \
       fragmented atoms?",
      TaxonomyNode::choice(&[
        (
          "Atomized (Independent agents, parallel activity, no links)",
          "Everyone acts alone, side by side.",
        ),
        (
          "Dyadic (Exclusive 1-on-1 interaction)",
          "Two agents locked on each other.",
        ),
        (
          "Centralized (Hub-and-Spoke, focus on single leader/object)",
          "One hub commands the group's attention.",
        ),
        (
          "Distributed (Mesh network, free-flowing many-to-many)",
          "Interaction flows freely between all members.",
        ),
        (
          "Clustered (Distinct subgroups/cliques interacting internally)",
          "The group splits into cliques.",
        ),
        (
          "Sequential (Round-robin, turn-taking passed in a loop)",
          "The floor circulates in a fixed order.",
        ),
        (
          "Polarized (Group explicitly united *against* or *ignoring* an outsider)",
          "The group defines itself against an outsider.",
        ),
      ]),
    ),
    Field::required(
      "size_category",
      "What is the magnitude of participants involved?",
      TaxonomyNode::choice(&[
        ("Solo (1)", "A single agent."),
        ("Dyadic (2)", "A pair."),
        ("Triadic (3)", "Three agents."),
        ("Small Group (4-10)", "A team-sized group."),
        ("Large Group (11+)", "A crowd."),
      ]),
    ),
    Field::required(
      "focus_level",
      "Is the group's attention unified on a single subject, or \
       fragmented?",
      TaxonomyNode::choice(&[
        ("High Focus (All Eyes on Subject)", "Attention is unified."),
        ("Moderate Focus (Some Attention on Subject)", "Attention is split."),
        ("Low Focus (Attention is Dispersed)", "Attention is scattered."),
      ]),
    ),
    Field::required(
      "orientation",
      "Does the physical geometry of the agents face inward to \
       encourage connection, or outward to discourage it?",
      TaxonomyNode::choice(&[
        ("Sociopetal (Encourages Interaction)", "Geometry pulls agents together."),
        ("Sociofugal (Discourages Interaction)", "Geometry pushes agents apart."),
        (
          "Neutral (Neither Encourages nor Discourages Interactions)",
          "Geometry has no pull either way.",
        ),
      ]),
    ),
    Field::required(
      "norm_constraint",
      "How strict are the rules here? A tight culture with one right \
       way to act, or a loose culture where anything goes?",
      TaxonomyNode::choice(&[
        ("Tight (Strict Adherence)", "One right way to behave."),
        ("Loose (Permissive)", "Behaviour is largely unconstrained."),
        ("Ambiguous (Unclear Expectations)", "Nobody is sure what the rules are."),
      ]),
    ),
    Field::required(
      "norm_enforcement_strength",
      "If a norm were violated, how immediate and severe would the \
       social correction be?",
      TaxonomyNode::choice(&[
        ("Weak (Rarely Enforced)", "Violations usually pass unremarked."),
        ("Implicit (Socially Enforced)", "Stares and silences do the policing."),
        (
          "Strong (Formally Enforced via Rules, Authority, Punishment)",
          "Formal authority punishes breaches.",
        ),
      ]),
    ),
    Field::required(
      "turn_taking_regime",
      "How is the floor managed? Spontaneous, strictly ordered by \
       authority, or chaotic?",
      TaxonomyNode::choice(&[
        (
          "Regulated (Formal turns, moderator-controlled)",
          "A moderator assigns the floor.",
        ),
        (
          "Semi-Regulated (Implicit politeness norms)",
          "Politeness norms regulate turns.",
        ),
        (
          "Unregulated (Free overlap, interruptions allowed)",
          "Anyone may interrupt at any time.",
        ),
      ]),
    ),
    Field::required(
      "interaction_density",
      "What is the pace of communication? Rapid-fire or slow and \
       sparse?",
      TaxonomyNode::choice(&[
        (
          "Sparse (Long pauses, infrequent turns, Single person speaking)",
          "Long silences between turns.",
        ),
        ("Moderate (Balanced exchange)", "An even conversational rhythm."),
        ("Dense (Rapid turns, high verbal activity)", "Turns come thick and fast."),
      ]),
    ),
    Field::required(
      "participation_access",
      "Who has the right to speak? Open to anyone, or gated by roles \
       and status?",
      TaxonomyNode::choice(&[
        ("Open (Anyone may speak)", "The floor is open."),
        ("Role-Gated (Only specific roles may speak)", "Only certain roles speak."),
        (
          "Conditional (Only when prompted or sanctioned)",
          "Speaking requires an invitation.",
        ),
      ]),
    ),
    Field::required(
      "temporal_pressure",
      "Is there urgency? Are the agents acting under a deadline or an \
       immediate threat?",
      TaxonomyNode::choice(&[
        ("Low (No urgency)", "Time is not a factor."),
        ("Medium (Time-aware but flexible)", "Time matters but bends."),
        ("High (Urgent, compressed interaction)", "The clock dominates."),
      ]),
    ),
    Field::required(
      "stakes_level",
      "What is at risk? Trivial, material, or symbolic consequences?",
      TaxonomyNode::choice(&[
        ("Low Stakes (Social / Recreational)", "Nothing real is on the line."),
        (
          "Medium Stakes (Reputation / Mild Conflict)",
          "Reputation or comfort is at risk.",
        ),
        (
          "High Stakes (Career / Safety / Legal / Life)",
          "Livelihood or safety is at risk.",
        ),
      ]),
    ),
    Field::required(
      "expected_valence",
      "What emotional tone does this setting demand? Somber, neutral, \
       or expressive?",
      TaxonomyNode::choice(&[
        ("Positive (Supportive, Affirming)", "Warmth is expected."),
        ("Neutral (Objective, Unbiased)", "Detachment is expected."),
        ("Negative (Critical, Confrontational)", "Criticism is expected."),
      ]),
    ),
    Field::required(
      "verdict",
      "Given all of the above, did the agent's behaviour adhere to the \
       active constraints or violate them?",
      norm_verdict(),
    ),
  ])
}

fn norm_verdict() -> TaxonomyNode {
  TaxonomyNode::section(vec![
    Field::required(
      "judgment",
      "Adherence, Violation, or Ambiguous.",
      TaxonomyNode::choice(&[
        ("Adherence", "Behaviour stayed within the constraints."),
        ("Violation", "At least one constraint was broken."),
        ("Ambiguous", "Cannot be judged either way."),
      ]),
    ),
    // The source declared this as a single optional object while
    // describing it as a list; the list reading wins.
    Field::optional(
      "violations",
      "The specific constraints that were broken. Empty when the \
       judgment is Adherence.",
      TaxonomyNode::seq(specific_violation()),
    ),
  ])
}

fn specific_violation() -> TaxonomyNode {
  TaxonomyNode::section(vec![
    Field::required(
      "target_category",
      "Must match the target category of the constraint that was broken.",
      TaxonomyNode::Text,
    ),
    Field::required(
      "cause_category",
      "The fundamental reason for the breach.",
      TaxonomyNode::choice(&[
        (
          "Ignorance (Agent did not know the rule - e.g., Tourist/Child)",
          "The rule was unknown to the agent.",
        ),
        (
          "Incapacity (Agent physically/mentally could not follow rule - e.g., Sneeze, Panic)",
          "The agent was unable to comply.",
        ),
        (
          "Prioritization (Agent deliberately chose a higher goal - e.g., Emergency, Profit)",
          "A higher goal outranked the rule.",
        ),
        (
          "Defiance (Agent broke rule specifically to send a message - e.g., Protest, Insult)",
          "The breach itself was the message.",
        ),
        (
          "Accidental (Unintended slip - e.g., Dropping a glass)",
          "An unintended slip.",
        ),
      ]),
    ),
    Field::required(
      "competing_force",
      "What specific drive overpowered the social norm? E.g. 'Extreme \
       Pain', 'Urgent Deadline', 'Desire to humiliate Agent B'.",
      TaxonomyNode::Text,
    ),
    Field::required(
      "expected_behavior",
      "What the constraint required, e.g. 'Silence'.",
      TaxonomyNode::Text,
    ),
    Field::required(
      "observed_behavior",
      "What the agent actually did, e.g. 'Yelled'.",
      TaxonomyNode::Text,
    ),
    Field::required(
      "is_excusable",
      "Given the cause, would a reasonable observer forgive this \
       violation? True for 'Heart Attack', false for 'Drunk'.",
      TaxonomyNode::Flag,
    ),
  ])
}

// ─── Communicative intent ────────────────────────────────────────────────────

pub fn communicative_intent() -> TaxonomyNode {
  TaxonomyNode::section(vec![
    Field::required(
      "speech_act",
      "What is the mechanical function of this utterance? An order, a \
       claim, a promise, or an expression of emotion?",
      TaxonomyNode::choice(&[
        (
          "Directive (Orders, Requests, Advice, Warnings)",
          "Attempts to make the listener act.",
        ),
        (
          "Assertive (Statements, Claims, Predictions, Dissent)",
          "Commits the speaker to a truth.",
        ),
        (
          "Commissive (Promises, Threats, Offers, Vows)",
          "Commits the speaker to a future act.",
        ),
        (
          "Expressive (Apologies, Thanks, Congratulations, Venting)",
          "Displays the speaker's state.",
        ),
        (
          "Declarative (Rituals: 'You're fired', 'I quit')",
          "Changes the world by being said.",
        ),
        (
          "Phatic (Channel checks: 'Hello', 'Can you hear me?')",
          "Maintains the channel itself.",
        ),
        (
          "Withholding (Intentional silence / non-response)",
          "Deliberate non-response.",
        ),
      ]),
    ),
    Field::required(
      "politeness_strategy",
      "How much social cushion did the speaker wrap around the message? \
       Did they attack the listener's face, protect it, or ignore it?",
      TaxonomyNode::choice(&[
        (
          "Bald on Record (Direct, no softening: 'Give me that.')",
          "No softening at all.",
        ),
        (
          "Positive Politeness (Boosting the listener: 'Hey buddy, can you help?')",
          "Softens by boosting the listener.",
        ),
        (
          "Negative Politeness (Minimizing imposition: 'Sorry to bother you, but...')",
          "Softens by minimising imposition.",
        ),
        (
          "Off Record (Vague/Indirect hint: 'It's cold in here' -> 'Close the window')",
          "Only hints at the request.",
        ),
        (
          "Hostile (Active attack on face: Insults, Snapping)",
          "Attacks the listener's face outright.",
        ),
      ]),
    ),
    Field::required(
      "social_vector",
      "What is the directional impact on the relationship? Pulling the \
       listener closer or pushing them away?",
      TaxonomyNode::choice(&[
        (
          "Affiliative (Bonding, Repairing, Supporting)",
          "Pulls the listener closer.",
        ),
        (
          "Adversarial (Attacking, Dominating, Criticizing)",
          "Pushes the listener away or down.",
        ),
        ("Neutral (Transactional, Objective)", "Neither pulls nor pushes."),
        ("Ambiguous (Unclear or Mixed)", "Mixed or unreadable."),
      ]),
    ),
    Field::required(
      "response_expectation",
      "Does this utterance create a social debt? Is the listener \
       obligated to reply or act, or is the floor now closed?",
      TaxonomyNode::choice(&[
        ("Required (Answer/action expected)", "The listener owes a response."),
        (
          "Optional (Response welcome but not required)",
          "A response is welcome, not owed.",
        ),
        ("None (No response expected)", "The floor is closed."),
      ]),
    ),
    Field::required(
      "sincerity_mode",
      "Is the speaker being genuine, strategic, or deceptive in their \
       intent?",
      TaxonomyNode::choice(&[
        (
          "Sincere (Aligned with internal state)",
          "The words match the inner state.",
        ),
        (
          "Strategic (Instrumental, face-managed)",
          "The words serve an instrumental goal.",
        ),
        ("Deceptive (Intentionally misleading)", "The words are meant to mislead."),
        (
          "Performative (Ritual / audience-facing)",
          "The words are for the audience.",
        ),
      ]),
    ),
    Field::required(
      "intent_category",
      "What is the high-level purpose of this communicative act?",
      TaxonomyNode::choice(&[
        (
          "Internalized Value (Agent acts out of personal honor/morality)",
          "Driven by personal morality.",
        ),
        (
          "Altruism (Agent acts to help the other, regardless of reward)",
          "Driven by helping the other.",
        ),
        (
          "Habitual (Agent acts on autopilot/script without thinking)",
          "Driven by script and habit.",
        ),
        (
          "Reciprocity (Agent acts to balance the Social Ledger / Repay debt)",
          "Driven by repaying a debt.",
        ),
        (
          "Compliance (Agent acts to avoid punishment/judgment)",
          "Driven by avoiding punishment.",
        ),
        (
          "Relational Maintenance (Agent acts to preserve the bond)",
          "Driven by preserving the bond.",
        ),
        (
          "Instrumental Gain (Agent acts to get a future reward)",
          "Driven by a future reward.",
        ),
        (
          "Signaling (Agent acts to prove status/virtue to an audience)",
          "Driven by an audience's esteem.",
        ),
      ]),
    ),
    Field::required(
      "intent_causal_reasoning",
      "Detailed explanation of why the agent is pursuing this intent.",
      TaxonomyNode::Text,
    ),
  ])
}

// ─── Relationship context ────────────────────────────────────────────────────

pub fn relationship_context() -> TaxonomyNode {
  TaxonomyNode::section(vec![
    Field::required(
      "relationship_type",
      "What is the official label for this relationship? A work \
       meeting or a family dinner?",
      TaxonomyNode::choice(&[
        (
          "Professional (Colleagues, Boss-Employee, Team)",
          "Tied together by work.",
        ),
        (
          "Transactional (Service Providers, Clerks, Functional Exchange)",
          "Tied together by an exchange.",
        ),
        (
          "Social (Friends, Neighbors, Civil Peers, Leisure Contexts)",
          "Tied together by leisure and civility.",
        ),
        ("Familial (Blood relatives, In-laws)", "Tied together by family."),
        ("Romantic (Partners, Dates, Exes)", "Tied together romantically."),
        (
          "Antagonistic (Rivals, Enemies, Opponents)",
          "Tied together by opposition.",
        ),
      ]),
    ),
    Field::required(
      "intimacy_level",
      "How thick is the psychological wall between them? Strangers or \
       soulmates?",
      TaxonomyNode::choice(&[
        ("Stranger (No history, no disclosure)", "No shared history."),
        ("Acquaintance (Surface info, 'Weak Tie')", "Surface-level knowledge."),
        (
          "Friend (Moderate disclosure, emotional support)",
          "Mutual disclosure and support.",
        ),
        (
          "Close/Intimate (Deep vulnerability, 'Thick Tie')",
          "Deep mutual vulnerability.",
        ),
      ]),
    ),
    Field::required(
      "power_dynamic",
      "Who holds the structural authority? Peer-to-peer or \
       boss-employee?",
      TaxonomyNode::choice(&[
        ("Symmetrical (Peers, Equals)", "Power is balanced."),
        (
          "Hierarchical (Clear Superior/Subordinate definition)",
          "One side clearly outranks the other.",
        ),
        (
          "Competitive (Unstable or challenged hierarchy)",
          "Rank is contested.",
        ),
      ]),
    ),
    Field::optional(
      "power_causality",
      "Deep dive into the why of the power and trust dynamics.",
      relationship_causality(),
    ),
    Field::required(
      "trust_level",
      "What is the baseline level of safety? Do they expect the other \
       person to help them or hurt them?",
      TaxonomyNode::choice(&[
        (
          "High (Psychological safety, benefit of the doubt)",
          "Safety is assumed.",
        ),
        ("Neutral (Guarded, 'Trust but Verify')", "Guarded but civil."),
        ("Low (Suspicion, hesitation)", "Suspicion dominates."),
        (
          "Broken (Active betrayal, hostile expectations)",
          "Betrayal is expected.",
        ),
      ]),
    ),
    Field::required(
      "relationship_valence",
      "What is the general emotional tone of the relationship?",
      TaxonomyNode::choice(&[
        ("Positive (Warm, cooperative)", "Warm and cooperative."),
        ("Neutral (Functional, detached)", "Functional and detached."),
        ("Negative (Tense, resentful)", "Tense and resentful."),
        ("Ambivalent (Mixed signals)", "Mixed signals."),
      ]),
    ),
    Field::required(
      "relationship_trajectory",
      "Is the relationship improving, deteriorating, or stable over \
       time?",
      TaxonomyNode::choice(&[
        ("Stable (No meaningful change)", "Holding steady."),
        ("Improving (Repair, bonding, trust gain)", "Gaining trust."),
        ("Deteriorating (Erosion, conflict)", "Eroding."),
        ("Fracturing (Breakdown imminent)", "About to break."),
        ("Repairing (Post-conflict recovery)", "Recovering after conflict."),
      ]),
    ),
    Field::optional(
      "relationship_change_trigger",
      "What specific event, in this scene or in the past, explains why \
       the relationship is moving along this trajectory?",
      TaxonomyNode::Text,
    ),
  ])
}

fn relationship_causality() -> TaxonomyNode {
  TaxonomyNode::section(vec![
    Field::optional(
      "primary_power_source",
      "If the dynamic is hierarchical, what gives the superior their \
       power?",
      TaxonomyNode::choice(&[
        ("Legitimate (Official rank/authority)", "Official rank."),
        ("Coercive (Fear of punishment/force)", "Fear of punishment."),
        ("Reward (Control over resources/money)", "Control of resources."),
        ("Expert (Superior knowledge/skill)", "Superior knowledge."),
        ("Referent (Admiration/Loyalty/Charisma)", "Admiration and loyalty."),
        (
          "Informational (Blackmail/leverage via asymmetry)",
          "Leverage through information asymmetry.",
        ),
      ]),
    ),
    Field::required(
      "power_stability_analysis",
      "Causal logic: is the power dynamic stable? E.g. 'Unstable \
       because it relies on coercion, which breeds resentment'.",
      TaxonomyNode::Text,
    ),
    Field::optional(
      "relationship_change_trigger",
      "What specific event explains the trajectory? E.g. 'Agent A's \
       confession shifted Trust from High to Broken'.",
      TaxonomyNode::Text,
    ),
  ])
}

// ─── Emotional state ─────────────────────────────────────────────────────────

/// Ekman's basic six plus the social and cognitive states needed for
/// conflict and bonding analysis.
fn emotion_category() -> TaxonomyNode {
  TaxonomyNode::choice(&[
    ("Joy (Happiness, Amusement, Relief)", "Pleasure and relief."),
    ("Sadness (Grief, Disappointment, Despair)", "Loss and despair."),
    ("Anger (Frustration, Rage, Irritation)", "Frustration through rage."),
    ("Fear (Anxiety, Terror, Apprehension)", "Anxiety through terror."),
    ("Disgust (Revulsion, Contempt, Loathing)", "Revulsion and contempt."),
    ("Surprise (Shock, Astonishment)", "Shock and astonishment."),
    (
      "Shame (Feeling exposed/worthless - 'I am bad')",
      "Global self-condemnation.",
    ),
    (
      "Guilt (Feeling remorse for action - 'I did something bad')",
      "Remorse for a specific act.",
    ),
    ("Pride (Feeling superior/accomplished)", "Accomplishment and superiority."),
    ("Envy (Wanting what another has)", "Wanting what another has."),
    (
      "Jealousy (Fear of losing something to another)",
      "Fear of losing to a rival.",
    ),
    (
      "Embarrassment (Social awkwardness/accident)",
      "Social awkwardness.",
    ),
    ("Confusion (Uncertainty, Disorientation)", "Disorientation."),
    ("Interest (Curiosity, Engagement)", "Curiosity and engagement."),
    ("Boredom (Disengagement, Apathy)", "Disengagement."),
    ("Neutral (Baseline, Calm)", "Baseline calm."),
  ])
}

pub fn emotional_state() -> TaxonomyNode {
  TaxonomyNode::section(vec![
    Field::required(
      "felt_emotion",
      "What the agent is genuinely feeling inside, regardless of what \
       they show.",
      emotion_category(),
    ),
    Field::required(
      "arousal_level",
      "How intense is this feeling? Annoyance or rage?",
      TaxonomyNode::choice(&[
        ("Low (Subdued, Calm, Depressed)", "Subdued."),
        ("Moderate (Active, Noticeable)", "Noticeable."),
        ("High (Intense, Overwhelming, Visceral)", "Overwhelming."),
        (
          "Extreme (Out of control, Hysterical, Blind Rage)",
          "Out of control.",
        ),
      ]),
    ),
    Field::required(
      "valence",
      "Is this feeling pleasant or painful?",
      TaxonomyNode::choice(&[
        ("Positive (Pleasant)", "Pleasant."),
        ("Negative (Unpleasant)", "Unpleasant."),
        ("Neutral", "Neither."),
      ]),
    ),
    Field::required(
      "displayed_emotion",
      "What emotion is the agent showing to the world? May differ from \
       the felt emotion.",
      emotion_category(),
    ),
    Field::required(
      "display_rule",
      "Is the agent faking, hiding, or exaggerating this emotion? \
       'Smiling through the pain' is Masked.",
      TaxonomyNode::choice(&[
        (
          "Amplified (Exaggerating the feeling - e.g., Faking excitement)",
          "The display overshoots the feeling.",
        ),
        (
          "Deamplified (Downplaying the feeling - e.g., 'I'm fine')",
          "The display undersells the feeling.",
        ),
        (
          "Neutralized (Poker face - Hiding all emotion)",
          "All emotion is hidden.",
        ),
        (
          "Masked (Replacing true emotion with a fake one - e.g., Smiling while angry)",
          "A fake emotion covers the real one.",
        ),
        (
          "Genuine (Expression matches internal state)",
          "The display matches the feeling.",
        ),
      ]),
    ),
    Field::required(
      "trigger_event",
      "What specific event, word, or thought caused this emotion, and \
       why did it lead there? E.g. 'Agent B's insult'.",
      TaxonomyNode::Text,
    ),
  ])
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::{schema::render_format_instructions, validate::validate};

  #[test]
  fn root_has_expected_sections() {
    let root = social_event_analysis();
    let TaxonomyNode::Section { fields } = &root else {
      panic!("root must be a section");
    };
    let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["scene_id", "perception_layer", "comprehension_layer"]);
  }

  #[test]
  fn instructions_cover_nested_vocabularies() {
    let text = render_format_instructions(&social_event_analysis());
    assert!(text.contains("social_normative_context"));
    assert!(text.contains("felt_emotion"));
    assert!(text.contains("\"Adherence\""));
    assert!(text.contains("politeness_strategy"));
  }

  #[test]
  fn emotional_state_accepts_a_complete_block() {
    let input = json!({
      "felt_emotion": "Anger (Frustration, Rage, Irritation)",
      "arousal_level": "High (Intense, Overwhelming, Visceral)",
      "valence": "Negative (Unpleasant)",
      "displayed_emotion": "Neutral (Baseline, Calm)",
      "display_rule": "Neutralized (Poker face - Hiding all emotion)",
      "trigger_event": "The missed deadline was announced.",
    });

    let record = validate(&input, &emotional_state()).unwrap();
    assert_eq!(record.to_value(), input);
  }

  #[test]
  fn emotional_state_rejects_an_unlisted_emotion() {
    let input = json!({
      "felt_emotion": "Melancholy",
      "arousal_level": "Low (Subdued, Calm, Depressed)",
      "valence": "Negative (Unpleasant)",
      "displayed_emotion": "Neutral (Baseline, Calm)",
      "display_rule": "Genuine (Expression matches internal state)",
      "trigger_event": "x",
    });

    let err = validate(&input, &emotional_state()).unwrap_err();
    let crate::Error::Validation(violations) = err else {
      panic!("expected validation failure");
    };
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path(), "$.felt_emotion");
  }

  #[test]
  fn verdict_violations_default_to_empty_list() {
    let input = json!({ "judgment": "Adherence" });
    let record = validate(&input, &norm_verdict()).unwrap();
    assert_eq!(record.to_value()["violations"], json!([]));
  }

  #[test]
  fn verdict_accepts_populated_violation_list() {
    let input = json!({
      "judgment": "Violation",
      "violations": [{
        "target_category": "turn_taking_regime",
        "cause_category":
          "Defiance (Agent broke rule specifically to send a message - e.g., Protest, Insult)",
        "competing_force": "Desire to humiliate Agent B",
        "expected_behavior": "Wait for the moderator",
        "observed_behavior": "Interrupted repeatedly",
        "is_excusable": false,
      }],
    });

    let record = validate(&input, &norm_verdict()).unwrap();
    assert_eq!(record.to_value(), input);
  }
}
