//! Built-in topic library data.
//!
//! Read-only reference list; never persisted. Custom topics live in the
//! user document, under a disjoint `custom-` id namespace.

use crate::model::user_data::{Topic, TopicCategory};
use once_cell::sync::Lazy;

fn builtin(id: &str, name: &str, category: TopicCategory, icon: &str) -> Topic {
    Topic {
        id: id.to_string(),
        name: name.to_string(),
        category,
        is_custom: false,
        icon: Some(icon.to_string()),
    }
}

/// The full built-in topic list, in catalog (display) order.
pub static TOPIC_LIBRARY: Lazy<Vec<Topic>> = Lazy::new(|| {
    use TopicCategory::*;
    vec![
        // Languages
        builtin("lang-typescript", "TypeScript", Languages, "\u{1F4D8}"),
        builtin("lang-javascript", "JavaScript", Languages, "\u{1F4D2}"),
        builtin("lang-python", "Python", Languages, "\u{1F40D}"),
        builtin("lang-csharp", "C#", Languages, "\u{1F49C}"),
        builtin("lang-java", "Java", Languages, "\u{2615}"),
        builtin("lang-go", "Go", Languages, "\u{1F439}"),
        builtin("lang-rust", "Rust", Languages, "\u{1F980}"),
        builtin("lang-sql", "SQL", Languages, "\u{1F5C3}\u{FE0F}"),
        builtin("lang-cpp", "C++", Languages, "\u{26A1}"),
        builtin("lang-ruby", "Ruby", Languages, "\u{1F48E}"),
        // Frontend
        builtin("fe-react", "React", Frontend, "\u{269B}\u{FE0F}"),
        builtin("fe-vue", "Vue.js", Frontend, "\u{1F49A}"),
        builtin("fe-angular", "Angular", Frontend, "\u{1F170}\u{FE0F}"),
        builtin("fe-svelte", "Svelte", Frontend, "\u{1F525}"),
        builtin("fe-nextjs", "Next.js", Frontend, "\u{25B2}"),
        builtin("fe-html-css", "HTML/CSS", Frontend, "\u{1F3A8}"),
        builtin("fe-tailwind", "Tailwind CSS", Frontend, "\u{1F30A}"),
        builtin("fe-accessibility", "Accessibility (a11y)", Frontend, "\u{267F}"),
        builtin("fe-testing", "Frontend Testing", Frontend, "\u{1F9EA}"),
        // Backend
        builtin("be-nodejs", "Node.js", Backend, "\u{1F49A}"),
        builtin("be-dotnet", ".NET / ASP.NET", Backend, "\u{1F7E3}"),
        builtin("be-django", "Django", Backend, "\u{1F3B8}"),
        builtin("be-fastapi", "FastAPI", Backend, "\u{26A1}"),
        builtin("be-spring", "Spring Boot", Backend, "\u{1F343}"),
        builtin("be-graphql", "GraphQL", Backend, "\u{1F4CA}"),
        builtin("be-rest", "REST API Design", Backend, "\u{1F50C}"),
        builtin("be-grpc", "gRPC", Backend, "\u{1F4E1}"),
        builtin("be-auth", "Authentication/OAuth", Backend, "\u{1F510}"),
        // Cloud/Infra
        builtin("cloud-azure", "Azure", CloudInfra, "\u{2601}\u{FE0F}"),
        builtin("cloud-aws", "AWS", CloudInfra, "\u{1F7E0}"),
        builtin("cloud-gcp", "Google Cloud", CloudInfra, "\u{1F535}"),
        builtin("cloud-kubernetes", "Kubernetes", CloudInfra, "\u{26F5}"),
        builtin("cloud-docker", "Docker", CloudInfra, "\u{1F433}"),
        builtin("cloud-terraform", "Terraform", CloudInfra, "\u{1F3D7}\u{FE0F}"),
        builtin("cloud-serverless", "Serverless/Functions", CloudInfra, "\u{26A1}"),
        builtin("cloud-networking", "Cloud Networking", CloudInfra, "\u{1F310}"),
        // Data
        builtin("data-postgresql", "PostgreSQL", Data, "\u{1F418}"),
        builtin("data-mongodb", "MongoDB", Data, "\u{1F343}"),
        builtin("data-cosmosdb", "CosmosDB", Data, "\u{1F30C}"),
        builtin("data-redis", "Redis", Data, "\u{1F534}"),
        builtin("data-kafka", "Kafka", Data, "\u{1F4EC}"),
        builtin("data-elasticsearch", "Elasticsearch", Data, "\u{1F50D}"),
        builtin("data-modeling", "Data Modeling", Data, "\u{1F4D0}"),
        builtin("data-etl", "ETL/Data Pipelines", Data, "\u{1F504}"),
        // Architecture
        builtin("arch-microservices", "Microservices", Architecture, "\u{1F9E9}"),
        builtin("arch-event-driven", "Event-Driven Architecture", Architecture, "\u{1F4E8}"),
        builtin("arch-ddd", "Domain-Driven Design", Architecture, "\u{1F3DB}\u{FE0F}"),
        builtin("arch-system-design", "System Design", Architecture, "\u{1F4CB}"),
        builtin("arch-patterns", "Design Patterns", Architecture, "\u{1F3AF}"),
        builtin("arch-api-design", "API Design", Architecture, "\u{1F4DD}"),
        builtin("arch-cqrs", "CQRS/Event Sourcing", Architecture, "\u{1F4CA}"),
        builtin("arch-clean", "Clean Architecture", Architecture, "\u{2728}"),
        // DevOps
        builtin("devops-cicd", "CI/CD Pipelines", DevOps, "\u{1F504}"),
        builtin("devops-git", "Git & Version Control", DevOps, "\u{1F4DA}"),
        builtin("devops-github-actions", "GitHub Actions", DevOps, "\u{1F916}"),
        builtin("devops-monitoring", "Monitoring & Observability", DevOps, "\u{1F4C8}"),
        builtin("devops-security", "DevSecOps", DevOps, "\u{1F512}"),
        builtin("devops-testing", "Test Automation", DevOps, "\u{1F9EA}"),
        builtin("devops-iac", "Infrastructure as Code", DevOps, "\u{1F4DC}"),
        // Soft Skills
        builtin("soft-communication", "Communication", SoftSkills, "\u{1F4AC}"),
        builtin("soft-leadership", "Leadership", SoftSkills, "\u{1F451}"),
        builtin("soft-mentoring", "Mentoring", SoftSkills, "\u{1F393}"),
        builtin("soft-documentation", "Documentation", SoftSkills, "\u{1F4D6}"),
        builtin("soft-problem-solving", "Problem Solving", SoftSkills, "\u{1F9E0}"),
        builtin("soft-collaboration", "Collaboration", SoftSkills, "\u{1F91D}"),
        builtin("soft-time-mgmt", "Time Management", SoftSkills, "\u{23F0}"),
        builtin("soft-presenting", "Presenting", SoftSkills, "\u{1F3A4}"),
    ]
});
