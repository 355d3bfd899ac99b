//! Static content tables for the playbook page.
//!
//! Every record here is a compile-time constant. Nothing mutates these
//! tables at runtime and nothing can fail while reading them; the page
//! renderer consumes them in declaration order.

pub mod validate;

/// One entry in the ordered playbook sequence.
///
/// Step titles double as display keys and must be unique. Array order is
/// display order — the steps are numbered 1–6 in their titles.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// Display title, e.g. `"1. Register Your Bot"`.
    pub title: &'static str,
    /// One-paragraph summary shown under the title.
    pub summary: &'static str,
    /// Ordered detail lines rendered as a bullet list.
    pub details: &'static [&'static str],
    /// Optional illustrative snippet rendered after the details.
    pub code: Option<CodeSample>,
}

/// An illustrative code block attached to a step.
///
/// The text is exposition only — it is never executed, only escaped and
/// displayed verbatim.
#[derive(Debug, Clone, Copy)]
pub struct CodeSample {
    /// Language tag shown in the block header, e.g. `"ts"`.
    pub language: &'static str,
    /// Block header title, e.g. a file name.
    pub title: &'static str,
    /// Literal block content.
    pub text: &'static str,
}

/// One card in the architecture cheat sheet.
#[derive(Debug, Clone, Copy)]
pub struct ArchitectureTip {
    /// Card title; unique among tips.
    pub title: &'static str,
    /// Ordered bullet lines.
    pub bullets: &'static [&'static str],
}

/// One outbound link card in the further-resources section.
#[derive(Debug, Clone, Copy)]
pub struct ResourceLink {
    /// Link title.
    pub title: &'static str,
    /// Short description shown under the title.
    pub description: &'static str,
    /// Absolute URL to third-party documentation, included verbatim.
    pub href: &'static str,
}

/// Hero copy and the two in-page action links.
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    /// Small eyebrow line above the heading.
    pub eyebrow: &'static str,
    /// Main page heading.
    pub heading: &'static str,
    /// Lede paragraph.
    pub lede: &'static str,
    /// Primary action: label and fragment href.
    pub primary_action: HeroAction,
    /// Secondary action: label and fragment href.
    pub secondary_action: HeroAction,
}

/// A hero call-to-action link targeting a section anchor.
#[derive(Debug, Clone, Copy)]
pub struct HeroAction {
    /// Link label.
    pub label: &'static str,
    /// Fragment href, e.g. `"#playbook"`.
    pub href: &'static str,
}

/// Footer copy.
#[derive(Debug, Clone, Copy)]
pub struct Footer {
    /// Closing message.
    pub message: &'static str,
    /// Back-to-top link label.
    pub back_label: &'static str,
    /// Back-to-top fragment href.
    pub back_href: &'static str,
}

/// Heading and optional intro paragraph for a page section.
#[derive(Debug, Clone, Copy)]
pub struct SectionHeader {
    /// Section heading.
    pub heading: &'static str,
    /// Optional intro paragraph under the heading.
    pub intro: Option<&'static str>,
}

/// The six playbook steps, in display order.
pub const STEPS: &[Step] = &[
    Step {
        title: "1. Register Your Bot",
        summary: "Talk to @BotFather in Telegram to generate a token that will \
                  authenticate your bot with the Bot API.",
        details: &[
            "Open Telegram, search for @BotFather, and start a chat.",
            "Send the command /newbot and follow the prompts to choose a name and username.",
            "Copy the HTTP API token BotFather returns; you need it in every request.",
        ],
        code: None,
    },
    Step {
        title: "2. Choose a Runtime",
        summary: "Pick any HTTP-capable environment (Node.js, Deno, Python, Go, etc.). \
                  Below is a minimal Express server in Node.js.",
        details: &[
            "Install dependencies: yarn add express node-telegram-bot-api",
            "Expose a webhook endpoint or use long polling while prototyping.",
        ],
        code: Some(CodeSample {
            language: "ts",
            title: "app.ts (Long Polling)",
            text: r#"import TelegramBot from "node-telegram-bot-api";

const token = process.env.BOT_TOKEN!;
const bot = new TelegramBot(token, { polling: true });

bot.on("message", (msg) => {
  const text = msg.text?.trim() ?? "";

  if (/^\/start/.test(text)) {
    bot.sendMessage(msg.chat.id, "Welcome to the bot! Try /help");
    return;
  }

  if (/^\/help/.test(text)) {
    bot.sendMessage(
      msg.chat.id,
      "Commands:\n/start - Welcome\n/help - Docs link\n/echo - Repeat"
    );
    return;
  }

  if (/^\/echo/.test(text)) {
    bot.sendMessage(msg.chat.id, text.replace("/echo", "").trim());
    return;
  }

  bot.sendMessage(msg.chat.id, "Send /help to see what I can do.");
});"#,
        }),
    },
    Step {
        title: "3. Secure Configuration",
        summary: "Keep secrets out of source control and configure secure infrastructure \
                  before exposing the bot.",
        details: &[
            "Store BOT_TOKEN and other secrets in environment variables or a secrets manager.",
            "Rotate tokens if you suspect exposure; BotFather can revoke and refresh instantly.",
            "Validate incoming updates when using webhooks to block spoofed requests.",
        ],
        code: None,
    },
    Step {
        title: "4. Pick Delivery Strategy",
        summary: "Long polling is easy but limited. Webhooks are resilient and required at scale.",
        details: &[
            "Long polling: your server requests updates every ~30 seconds. Great for prototypes \
             and local development.",
            "Webhooks: Telegram pushes updates to your HTTPS endpoint. Requires a publicly \
             reachable URL and TLS cert.",
            "Serverless platforms (Vercel/Cloudflare Workers) work well with webhooks using \
             lightweight frameworks.",
        ],
        code: None,
    },
    Step {
        title: "5. Design Conversational Flows",
        summary: "Define user goals, split them into states, and keep responses short, clear, \
                  and actionable.",
        details: &[
            "Write sample conversations; treat each message as a state transition.",
            "Persist user state (Redis, Upstash, Firestore, Supabase, etc.) for multi-step \
             journeys.",
            "Use reply keyboards and inline buttons to guide users and avoid free-form text \
             when possible.",
        ],
        code: None,
    },
    Step {
        title: "6. Test & Deploy",
        summary: "Automate validation, monitor uptime, and ship confidently to production.",
        details: &[
            "Add unit tests around command handlers and integrations.",
            "Use staging bots to trial new flows before promoting them.",
            "Monitor errors (Sentry, Logtail) and metrics (Prometheus, Grafana, or hosted \
             services).",
        ],
        code: None,
    },
];

/// The architecture cheat sheet cards, in display order.
pub const ARCHITECTURE_TIPS: &[ArchitectureTip] = &[
    ArchitectureTip {
        title: "Handling High Throughput",
        bullets: &[
            "Scale horizontally by sharding updates per bot or chat id.",
            "Offload heavy work to background queues (BullMQ, RabbitMQ).",
            "Cache expensive API responses (weather, pricing) to stay responsive.",
        ],
    },
    ArchitectureTip {
        title: "User Experience",
        bullets: &[
            "Answer within 2 seconds to avoid Telegram’s typing indicator fallback.",
            "Use sendChatAction to show typing/uploading when tasks take longer.",
            "Always include a fallback /help path and human handoff instructions.",
        ],
    },
    ArchitectureTip {
        title: "Safety & Compliance",
        bullets: &[
            "Rate-limit outbound messages to comply with Telegram’s limits.",
            "Log user consent when collecting personal data; respect GDPR/local laws.",
            "Sanitize user input before forwarding to external APIs or storage.",
        ],
    },
];

/// The launch checklist. Order is display-only.
pub const LAUNCH_CHECKLIST: &[&str] = &[
    "Load test using Telegram's getUpdates replay or custom mocks.",
    "Set up downtime alerts for your webhook endpoint.",
    "Schedule token rotation and secrets review.",
    "Plan customer support workflows for escalations.",
];

/// Outbound documentation links, in display order.
pub const RESOURCE_LINKS: &[ResourceLink] = &[
    ResourceLink {
        title: "Core Bot API",
        description: "Official documentation for every method, update type, and best practice \
                      recommendation from Telegram.",
        href: "https://core.telegram.org/bots",
    },
    ResourceLink {
        title: "python-telegram-bot",
        description: "Mature Python SDK featuring async support, webhook helpers, and \
                      conversation handlers.",
        href: "https://python-telegram-bot.org/",
    },
    ResourceLink {
        title: "grammY (TypeScript)",
        description: "Lightweight, middleware-driven framework ideal for modern TypeScript \
                      codebases and serverless deployments.",
        href: "https://grammY.dev/",
    },
    ResourceLink {
        title: "Telegram Web Apps",
        description: "Extend bots with interactive web UIs embedded directly inside chats and \
                      launched with a single tap.",
        href: "https://core.telegram.org/bots/webapps",
    },
];

/// Hero copy.
pub const HERO: Hero = Hero {
    eyebrow: "Telegram Bot Playbook",
    heading: "Build, launch, and scale a Telegram bot with confidence.",
    lede: "Follow this battle-tested roadmap—from BotFather registration to production \
           monitoring—and ship an engaging Telegram automation in hours instead of weeks.",
    primary_action: HeroAction {
        label: "Explore the Playbook",
        href: "#playbook",
    },
    secondary_action: HeroAction {
        label: "Jump to Resources",
        href: "#resources",
    },
};

/// Footer copy.
pub const FOOTER: Footer = Footer {
    message: "Ready to ship? Redeploy whenever you iterate on your bot—Telegram users \
              love fast iteration cycles.",
    back_label: "Back to top ↑",
    back_href: "#playbook",
};

/// Playbook section header.
pub const PLAYBOOK_SECTION: SectionHeader = SectionHeader {
    heading: "Six-Step Playbook",
    intro: Some(
        "Each phase highlights best practices and pitfalls so you can move fast without \
         sacrificing reliability.",
    ),
};

/// Architecture cheat sheet section header.
pub const ARCHITECTURE_SECTION: SectionHeader = SectionHeader {
    heading: "Architecture Cheat Sheet",
    intro: None,
};

/// Launch checklist section header.
pub const CHECKLIST_SECTION: SectionHeader = SectionHeader {
    heading: "Launch Checklist",
    intro: Some("Run through these safeguards before inviting real users."),
};

/// Further resources section header.
pub const RESOURCES_SECTION: SectionHeader = SectionHeader {
    heading: "Further Resources",
    intro: Some(
        "Deepen your expertise with official documentation, SDKs, and production-ready tooling.",
    ),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_steps_in_numbered_order() {
        assert_eq!(STEPS.len(), 6);
        for (i, step) in STEPS.iter().enumerate() {
            let expected_prefix = format!("{}.", i + 1);
            assert!(
                step.title.starts_with(&expected_prefix),
                "step {} title should start with '{expected_prefix}': {}",
                i,
                step.title
            );
        }
    }

    #[test]
    fn only_runtime_step_carries_code() {
        let with_code: Vec<&str> = STEPS
            .iter()
            .filter(|s| s.code.is_some())
            .map(|s| s.title)
            .collect();
        assert_eq!(with_code, vec!["2. Choose a Runtime"]);
    }

    #[test]
    fn code_sample_has_language_and_title() {
        let sample = STEPS[1].code.expect("step 2 has a code sample");
        assert_eq!(sample.language, "ts");
        assert_eq!(sample.title, "app.ts (Long Polling)");
        assert!(sample.text.contains("new TelegramBot(token, { polling: true })"));
    }

    #[test]
    fn table_sizes_match_source_material() {
        assert_eq!(ARCHITECTURE_TIPS.len(), 3);
        assert_eq!(LAUNCH_CHECKLIST.len(), 4);
        assert_eq!(RESOURCE_LINKS.len(), 4);
    }

    #[test]
    fn hero_actions_target_known_anchors() {
        assert_eq!(HERO.primary_action.href, "#playbook");
        assert_eq!(HERO.secondary_action.href, "#resources");
        assert_eq!(FOOTER.back_href, "#playbook");
    }
}
