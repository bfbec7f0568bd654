//! End-to-end behavior against a mock GraphQL endpoint.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use campo_client::prelude::model::User;
use campo_client::prelude::operation::sector::{
    InsertSector, InsertSectorVariables, ListSectors, ListSectorsVariables, SectorChanges,
    UpdateSector, UpdateSectorVariables,
};
use campo_client::prelude::operation::user::GetUserByEmailVariables;
use campo_client::{
    AuthSession, CampoClient, Configuration, FetchError, IdentityStorage, ScopedClient,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, Respond, ResponseTemplate};

fn configuration(server: &MockServer) -> Configuration {
    Configuration::builder()
        .endpoint(Url::parse(&server.uri()).unwrap())
        .build()
}

fn logged_in_session(propriedade_id: &str) -> AuthSession {
    let storage = IdentityStorage::in_memory();
    storage
        .write(&User {
            id: "u1".into(),
            nome: "Maria".to_string(),
            email: "maria@campo.agr.br".to_string(),
            propriedade_id: Some(propriedade_id.into()),
        })
        .unwrap();
    AuthSession::restore(storage).unwrap()
}

/// A sector table living behind the mock endpoint.
#[derive(Clone, Default)]
struct SectorBackend {
    rows: Arc<Mutex<Vec<Value>>>,
}

impl SectorBackend {
    fn snapshot(&self) -> Vec<Value> {
        self.rows.lock().unwrap().clone()
    }

    async fn mount(&self, server: &MockServer) {
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "operationName": "ListSectors" })))
            .respond_with(ListResponder(self.clone()))
            .mount(server)
            .await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "operationName": "InsertSector" })))
            .respond_with(InsertResponder(self.clone()))
            .mount(server)
            .await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "operationName": "UpdateSector" })))
            .respond_with(UpdateResponder(self.clone()))
            .mount(server)
            .await;
    }
}

struct ListResponder(SectorBackend);

impl Respond for ListResponder {
    fn respond(&self, _request: &wiremock::Request) -> ResponseTemplate {
        let rows = self.0.snapshot();
        ResponseTemplate::new(200).set_body_json(json!({ "data": { "setores": rows } }))
    }
}

struct InsertResponder(SectorBackend);

impl Respond for InsertResponder {
    fn respond(&self, request: &wiremock::Request) -> ResponseTemplate {
        let body: Value = request.body_json().unwrap();
        let variables = &body["variables"];
        let mut rows = self.0.rows.lock().unwrap();
        let row = json!({
            "id": format!("s{}", rows.len() + 1),
            "nome": variables["nome"],
            "propriedade_id": variables["propriedade_id"],
            "area": variables.get("area").cloned().unwrap_or(Value::Null),
            "coordenadas": variables.get("coordenadas").cloned().unwrap_or(Value::Null),
            "cultura_id": variables.get("cultura_id").cloned().unwrap_or(Value::Null),
        });
        rows.push(row.clone());
        ResponseTemplate::new(200).set_body_json(json!({ "data": { "insert_setores_one": row } }))
    }
}

struct UpdateResponder(SectorBackend);

impl Respond for UpdateResponder {
    fn respond(&self, request: &wiremock::Request) -> ResponseTemplate {
        let body: Value = request.body_json().unwrap();
        let id = body["variables"]["id"].clone();
        let changes = body["variables"]["changes"].as_object().cloned().unwrap();
        let mut rows = self.0.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row["id"] == id)
            .expect("update targets an existing row");
        for (column, value) in changes {
            row[column.as_str()] = value;
        }
        let updated = row.clone();
        ResponseTemplate::new(200)
            .set_body_json(json!({ "data": { "update_setores_by_pk": updated } }))
    }
}

#[test_log::test(tokio::test)]
async fn insert_is_scoped_and_refetches_the_list() {
    let server = MockServer::start().await;
    let backend = SectorBackend::default();
    backend.mount(&server).await;

    let client = CampoClient::new(&configuration(&server)).unwrap();
    let scoped = ScopedClient::new(client, logged_in_session("p1"));

    let before = scoped
        .query::<ListSectors>(ListSectorsVariables::default())
        .await
        .unwrap()
        .ready()
        .unwrap();
    assert!(before.setores.is_empty());

    let inserted = scoped
        .mutate::<InsertSector>(InsertSectorVariables {
            nome: "Setor Norte".to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
        .ready()
        .unwrap();
    assert_eq!(inserted.insert_setores_one.nome, "Setor Norte");

    // The wire saw exactly the declared variables: the name plus the
    // injected tenant, nothing else.
    let requests = server.received_requests().await.unwrap();
    let insert_body: Value = requests
        .iter()
        .map(|request| request.body_json::<Value>().unwrap())
        .find(|body| body["operationName"] == "InsertSector")
        .unwrap();
    assert_eq!(
        insert_body["variables"],
        json!({ "nome": "Setor Norte", "propriedade_id": "p1" })
    );

    // The insert invalidated the list, so this read refetches and sees the
    // new row instead of the cached empty list.
    let after = scoped
        .query::<ListSectors>(ListSectorsVariables::default())
        .await
        .unwrap()
        .ready()
        .unwrap();
    assert_eq!(after.setores.len(), 1);
    assert_eq!(after.setores[0].nome, "Setor Norte");

    let list_requests = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|request| {
            request.body_json::<Value>().unwrap()["operationName"] == "ListSectors"
        })
        .count();
    assert_eq!(list_requests, 2);
}

#[tokio::test]
async fn cached_list_is_served_without_a_second_request() {
    let server = MockServer::start().await;
    let backend = SectorBackend::default();
    backend.mount(&server).await;

    let client = CampoClient::new(&configuration(&server)).unwrap();
    let scoped = ScopedClient::new(client, logged_in_session("p1"));

    for _ in 0..3 {
        scoped
            .query::<ListSectors>(ListSectorsVariables::default())
            .await
            .unwrap();
    }

    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn no_session_issues_no_request() {
    let server = MockServer::start().await;
    let backend = SectorBackend::default();
    backend.mount(&server).await;

    let client = CampoClient::new(&configuration(&server)).unwrap();
    let scoped = ScopedClient::new(client, AuthSession::restore(IdentityStorage::in_memory()).unwrap());

    let outcome = scoped
        .query::<ListSectors>(ListSectorsVariables::default())
        .await
        .unwrap();

    assert!(outcome.is_disabled());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[test_log::test(tokio::test)]
async fn concurrent_mutations_settle_on_the_last_write() {
    let server = MockServer::start().await;
    let backend = SectorBackend::default();
    backend.rows.lock().unwrap().push(json!({
        "id": "s1",
        "nome": "Setor Norte",
        "propriedade_id": "p1",
        "area": null,
        "coordenadas": null,
        "cultura_id": null,
    }));
    backend.mount(&server).await;

    let client = CampoClient::new(&configuration(&server)).unwrap();

    let rename = |client: CampoClient, nome: &'static str| async move {
        client
            .mutate::<UpdateSector>(UpdateSectorVariables {
                id: "s1".into(),
                changes: SectorChanges {
                    nome: Some(nome.to_string()),
                    ..Default::default()
                },
            })
            .await
    };

    // Nothing coordinates these: both complete, and whichever reached the
    // backend last determines the row.
    let (leste, oeste) = tokio::join!(
        rename(client.clone(), "Setor Leste"),
        rename(client.clone(), "Setor Oeste")
    );
    leste.unwrap();
    oeste.unwrap();

    let final_nome = backend.snapshot()[0]["nome"].as_str().unwrap().to_string();
    assert!(final_nome == "Setor Leste" || final_nome == "Setor Oeste");

    // Both updates invalidated the list, so the next read refetches and the
    // cache settles on the last write.
    let scoped = ScopedClient::new(client, logged_in_session("p1"));
    let list = scoped
        .query::<ListSectors>(ListSectorsVariables::default())
        .await
        .unwrap()
        .ready()
        .unwrap();
    assert_eq!(list.setores[0].nome, final_nome);
}

#[tokio::test]
async fn identical_concurrent_reads_share_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "operationName": "ListSectors" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "setores": [] } }))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = CampoClient::new(&configuration(&server)).unwrap();
    let scoped = ScopedClient::new(client, logged_in_session("p1"));

    let (first, second) = tokio::join!(
        scoped.query::<ListSectors>(ListSectorsVariables::default()),
        scoped.query::<ListSectors>(ListSectorsVariables::default()),
    );
    assert!(first.unwrap().ready().unwrap().setores.is_empty());
    assert!(second.unwrap().ready().unwrap().setores.is_empty());
}

#[tokio::test]
async fn login_with_unknown_email_leaves_identity_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "operationName": "GetUserByEmail" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "usuarios": [] } })),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let storage = IdentityStorage::on_disk(dir.path());
    let session = AuthSession::restore(storage.clone()).unwrap();
    let client = CampoClient::new(&configuration(&server)).unwrap();

    let error = session
        .login(&client, "ninguem@campo.agr.br", "segredo")
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Usuário não encontrado");
    assert_eq!(storage.read().unwrap(), None);
    assert!(!dir.path().join("user").exists());
    assert!(session.current_user().is_none());
}

#[tokio::test]
async fn login_persists_the_public_profile_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "operationName": "GetUserByEmail" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "usuarios": [{
                "id": "u1",
                "nome": "Maria",
                "email": "maria@campo.agr.br",
                "senha": "segredo",
                "propriedade_id": "p1",
            }] }
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let storage = IdentityStorage::on_disk(dir.path());
    let session = AuthSession::restore(storage.clone()).unwrap();
    let client = CampoClient::new(&configuration(&server)).unwrap();

    let wrong = session
        .login(&client, "maria@campo.agr.br", "errado")
        .await
        .unwrap_err();
    assert_eq!(wrong.to_string(), "Senha incorreta");
    assert_eq!(storage.read().unwrap(), None);

    let user = session
        .login(&client, "maria@campo.agr.br", "segredo")
        .await
        .unwrap();
    assert_eq!(user.propriedade_id, Some("p1".into()));
    assert_eq!(session.propriedade_id(), Some("p1".into()));

    let raw = std::fs::read_to_string(dir.path().join("user")).unwrap();
    assert!(!raw.contains("senha"));

    // A fresh session restores the persisted identity.
    let restored = AuthSession::restore(storage).unwrap();
    assert_eq!(restored.current_user(), Some(user));

    session.logout().unwrap();
    assert!(session.current_user().is_none());
    assert!(!dir.path().join("user").exists());
}

#[tokio::test]
async fn unauthorized_maps_to_its_own_kind() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = CampoClient::new(&configuration(&server)).unwrap();
    let error = client
        .query::<campo_client::prelude::operation::user::GetUserByEmail>(
            GetUserByEmailVariables {
                email: "maria@campo.agr.br".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(error.is_unauthorized());
    assert!(!error.is_transient());
    assert_eq!(
        FetchError::unauthorized_to_none(Err::<(), _>(error)).unwrap(),
        None
    );
}

#[tokio::test]
async fn graphql_errors_surface_with_their_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "field \"setores\" not found in type: 'query_root'" }]
        })))
        .mount(&server)
        .await;

    let client = CampoClient::new(&configuration(&server)).unwrap();
    let scoped = ScopedClient::new(client, logged_in_session("p1"));
    let error = scoped
        .query::<ListSectors>(ListSectorsVariables::default())
        .await
        .unwrap_err();

    match error {
        FetchError::GraphqlErrors { errors } => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].message.contains("query_root"));
        }
        other => panic!("expected GraphQL errors, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_responses_hit_the_configured_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "setores": [] } }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let configuration = Configuration::builder()
        .endpoint(Url::parse(&server.uri()).unwrap())
        .timeout(Duration::from_millis(200))
        .build();
    let client = CampoClient::new(&configuration).unwrap();
    let scoped = ScopedClient::new(client, logged_in_session("p1"));

    let error = scoped
        .query::<ListSectors>(ListSectorsVariables::default())
        .await
        .unwrap_err();

    assert_eq!(error, FetchError::Timeout);
    assert!(error.is_transient());
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transient_transport_error() {
    // Bind and immediately drop a listener so the port is very likely free.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let configuration = Configuration::builder()
        .endpoint(Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap())
        .build();
    let client = CampoClient::new(&configuration).unwrap();
    let scoped = ScopedClient::new(client, logged_in_session("p1"));

    let error = scoped
        .query::<ListSectors>(ListSectorsVariables::default())
        .await
        .unwrap_err();

    assert!(matches!(error, FetchError::TransportError { .. }));
    assert!(error.is_transient());
}

#[tokio::test]
async fn admin_secret_rides_every_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(wiremock::matchers::header("x-hasura-admin-secret", "segredo"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "setores": [] } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let configuration = Configuration::builder()
        .endpoint(Url::parse(&server.uri()).unwrap())
        .admin_secret("segredo".to_string())
        .build();
    let client = CampoClient::new(&configuration).unwrap();
    let scoped = ScopedClient::new(client, logged_in_session("p1"));

    scoped
        .query::<ListSectors>(ListSectorsVariables::default())
        .await
        .unwrap();
}
