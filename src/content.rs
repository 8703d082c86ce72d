//! The compiled-in reference document.
//!
//! Everything the viewer shows comes from the tables in this module: the
//! navigation taxonomy (groups and their menu entries, each with prose body
//! paragraphs) and the list of documented API operations. The registry,
//! document layout and search index are all built from these two tables, so
//! adding an endpoint here is the only step needed to make it navigable and
//! searchable.

/// A menu entry in the navigation sidebar, backed by a prose section.
#[derive(Clone)]
pub struct NavEntry {
    /// Stable anchor id, unique across the whole document.
    pub id: String,
    /// Display label shown in the sidebar and search results.
    pub label: String,
    /// One-line summary used by the search index.
    pub summary: String,
    /// Body paragraphs rendered under the section heading.
    pub body: Vec<String>,
}

/// A named cluster of menu entries shown together in the sidebar.
#[derive(Clone)]
pub struct NavGroup {
    /// Stable group id, referenced by operations.
    pub id: String,
    /// Group heading shown in the sidebar.
    pub title: String,
    /// Menu entries in reading order. The first entry is the group's
    /// overview section, which operation sections map to for highlighting.
    pub entries: Vec<NavEntry>,
}

/// HTTP-ish verb of a documented operation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read-only retrieval.
    Get,
    /// Creation or invocation.
    Post,
    /// Removal.
    Delete,
    /// WebSocket upgrade.
    Wss,
}

impl Method {
    /// Badge text rendered next to the operation path.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
            Self::Wss => "WSS",
        }
    }
}

/// A documented API call, rendered as its own (non-menu) section.
#[derive(Clone)]
pub struct Operation {
    /// Stable anchor id, unique across the whole document.
    pub id: String,
    /// Operation title shown as the section heading and in search results.
    pub title: String,
    /// Verb badge.
    pub method: Method,
    /// Endpoint path relative to the API base URL.
    pub path: String,
    /// Prose description, also matched by the search index.
    pub description: String,
    /// Id of the [`NavGroup`] this operation belongs to.
    pub group_id: String,
    /// Example request, shown verbatim in a code block.
    pub request: Option<String>,
    /// Example response, shown verbatim in a code block.
    pub response: Option<String>,
}

fn entry(id: &str, label: &str, summary: &str, body: &[&str]) -> NavEntry {
    NavEntry {
        id: id.to_string(),
        label: label.to_string(),
        summary: summary.to_string(),
        body: body.iter().map(ToString::to_string).collect(),
    }
}

/// The navigation taxonomy in reading order.
#[must_use]
pub fn nav_groups() -> Vec<NavGroup> {
    vec![
        NavGroup {
            id: "get-started".to_string(),
            title: "Get Started".to_string(),
            entries: vec![
                entry(
                    "welcome",
                    "Welcome",
                    "What the Relay platform does and how the API is organised.",
                    &[
                        "Relay is a unified platform for conversational automation: \
                         chat completions, document intelligence and AI voice agents \
                         behind one authenticated HTTP API.",
                        "This reference walks through every endpoint in reading \
                         order. Use the sidebar to jump between areas, or press \
                         Ctrl+K to search the whole document.",
                    ],
                ),
                entry(
                    "authentication",
                    "Authentication",
                    "API keys and the Authorization header expected on every request.",
                    &[
                        "The Relay API authenticates requests with bearer API keys. \
                         Keys are created and revoked from the dashboard and carry \
                         full account privileges, so keep them out of client-side \
                         code and version control.",
                        "Every request must include the key in an Authorization \
                         header: Authorization: Bearer YOUR_API_KEY. Requests \
                         without a valid key receive 401 responses.",
                    ],
                ),
            ],
        },
        NavGroup {
            id: "chat".to_string(),
            title: "Chat API".to_string(),
            entries: vec![entry(
                "chat-overview",
                "Chat API",
                "Send messages to Relay chat models and receive completions.",
                &[
                    "The Chat API exposes Relay's conversational models. You \
                     provide a list of role-tagged messages and receive a \
                     completion; the model itself is a black box with no state \
                     between calls.",
                ],
            )],
        },
        NavGroup {
            id: "documents".to_string(),
            title: "Documents API".to_string(),
            entries: vec![entry(
                "documents-overview",
                "Documents API",
                "Analyze uploaded documents and draft new clauses with the legal models.",
                &[
                    "The Documents API runs Relay's legal intelligence models \
                     over uploaded files: risk analysis of existing contracts \
                     and guided drafting of new clauses.",
                ],
            )],
        },
        NavGroup {
            id: "voice".to_string(),
            title: "Voice API".to_string(),
            entries: vec![entry(
                "voice-overview",
                "Voice API",
                "Deploy AI voice agents for inbound and outbound phone calls.",
                &[
                    "The Voice API drives Relay's phone agents. Calls are \
                     asynchronous: initiating one returns immediately and the \
                     transcript becomes available once the call completes.",
                ],
            )],
        },
        NavGroup {
            id: "events".to_string(),
            title: "Events & Streaming".to_string(),
            entries: vec![entry(
                "events-overview",
                "Events & Streaming",
                "Webhooks for asynchronous state changes and a live WebSocket stream.",
                &[
                    "Long-running work reports back through events. Register a \
                     webhook to receive POST callbacks, or hold a WebSocket open \
                     for live transcripts and agent intervention.",
                ],
            )],
        },
    ]
}

#[allow(clippy::too_many_lines)]
/// The documented operations in reading order within their groups.
#[must_use]
pub fn operations() -> Vec<Operation> {
    vec![
        Operation {
            id: "chat-completions".to_string(),
            title: "Create Chat Completion".to_string(),
            method: Method::Post,
            path: "/v1/chat/completions".to_string(),
            description: "Send role-tagged messages to a chat model and receive a \
                          generated reply. Also supports chat streaming over \
                          server-sent events when the stream flag is set."
                .to_string(),
            group_id: "chat".to_string(),
            request: Some(
                "{\n  \"model\": \"relay-support-v1\",\n  \"messages\": [\n    {\"role\": \"user\", \"content\": \"What plans do you offer?\"}\n  ],\n  \"temperature\": 0.7\n}"
                    .to_string(),
            ),
            response: Some(
                "{\n  \"id\": \"cmpl_8f3a\",\n  \"choices\": [\n    {\"role\": \"assistant\", \"content\": \"We offer three plans...\"}\n  ]\n}"
                    .to_string(),
            ),
        },
        Operation {
            id: "chat-models".to_string(),
            title: "List Models".to_string(),
            method: Method::Get,
            path: "/v1/chat/models".to_string(),
            description: "Enumerate the chat models available to the authenticated \
                          account, with context window and pricing metadata."
                .to_string(),
            group_id: "chat".to_string(),
            request: None,
            response: Some(
                "{\n  \"models\": [\n    {\"id\": \"relay-support-v1\", \"context\": 32768},\n    {\"id\": \"relay-sales-v1\", \"context\": 32768}\n  ]\n}"
                    .to_string(),
            ),
        },
        Operation {
            id: "documents-analyze".to_string(),
            title: "Analyze Document".to_string(),
            method: Method::Post,
            path: "/v1/documents/analyze".to_string(),
            description: "Upload a PDF or text document for clause-level legal risk \
                          analysis. Returns a structured report of findings."
                .to_string(),
            group_id: "documents".to_string(),
            request: Some(
                "curl -X POST \"$BASE/v1/documents/analyze\" \\\n  -H \"Authorization: Bearer YOUR_API_KEY\" \\\n  -F \"file=@contract.pdf\" \\\n  -F \"mode=risk_assessment\""
                    .to_string(),
            ),
            response: None,
        },
        Operation {
            id: "documents-draft".to_string(),
            title: "Draft Clause".to_string(),
            method: Method::Post,
            path: "/v1/documents/draft".to_string(),
            description: "Generate a contract clause from a plain-language \
                          instruction, constrained to the uploaded document's \
                          jurisdiction and defined terms."
                .to_string(),
            group_id: "documents".to_string(),
            request: Some(
                "{\n  \"document_id\": \"doc_41c2\",\n  \"instruction\": \"Add a 30-day termination notice clause\"\n}"
                    .to_string(),
            ),
            response: None,
        },
        Operation {
            id: "voice-call".to_string(),
            title: "Initiate Outbound Call".to_string(),
            method: Method::Post,
            path: "/v1/voice/calls".to_string(),
            description: "Trigger an AI voice agent to call a phone number with an \
                          optional context object injected into the conversation."
                .to_string(),
            group_id: "voice".to_string(),
            request: Some(
                "{\n  \"phone_number\": \"+15550123456\",\n  \"agent_id\": \"agent_support_v1\",\n  \"context\": {\"customer_name\": \"Alice\"}\n}"
                    .to_string(),
            ),
            response: Some(
                "{\n  \"call_id\": \"call_9b1d\",\n  \"status\": \"dialing\"\n}".to_string(),
            ),
        },
        Operation {
            id: "voice-history".to_string(),
            title: "List Call History".to_string(),
            method: Method::Get,
            path: "/v1/voice/calls".to_string(),
            description: "Page through completed calls with their durations, \
                          outcomes and transcript links."
                .to_string(),
            group_id: "voice".to_string(),
            request: None,
            response: None,
        },
        Operation {
            id: "events-webhook".to_string(),
            title: "Webhook Configuration".to_string(),
            method: Method::Post,
            path: "/v1/webhooks".to_string(),
            description: "Register an HTTPS endpoint to receive POST callbacks for \
                          workflow completions, call milestones and analysis \
                          results."
                .to_string(),
            group_id: "events".to_string(),
            request: Some(
                "{\n  \"url\": \"https://example.com/hooks/relay\",\n  \"events\": [\"call.completed\", \"analysis.ready\"]\n}"
                    .to_string(),
            ),
            response: None,
        },
        Operation {
            id: "events-stream".to_string(),
            title: "WebSocket Stream".to_string(),
            method: Method::Wss,
            path: "/v1/stream".to_string(),
            description: "Hold a full-duplex WebSocket for real-time transcripts, \
                          audio buffering and live agent intervention."
                .to_string(),
            group_id: "events".to_string(),
            request: None,
            response: None,
        },
    ]
}
