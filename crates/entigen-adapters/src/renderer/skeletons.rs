//! Built-in template bodies.
//!
//! Each skeleton is a parametrized text body consumed by `RenderContext`:
//! `{{VARIABLE}}` slots plus `{{#each}}` / `{{/each}}` property blocks.
//! The controller and route templates carry a sentinel-bracketed region so
//! reruns can merge into hand-edited files; the region body is kept as its
//! own constant and spliced in, so full file and merge block never drift.

use entigen_core::domain::{REGION_CLOSE, REGION_OPEN};

// ── C# DTOs ──────────────────────────────────────────────────────────────────

pub const CREATE_REQUEST: &str = r#"using System;

namespace {{CORE_PROJECT}}.{{ENTITY_PLURAL_PASCAL}}.Dto.Request;

public class Create{{ENTITY_PASCAL}}Request
{
{{#each}}
    public {{PROP_CS_TYPE}} {{PROP_PASCAL}} { get; set; }
{{/each}}
}
"#;

pub const UPDATE_REQUEST: &str = r#"using System;

namespace {{CORE_PROJECT}}.{{ENTITY_PLURAL_PASCAL}}.Dto.Request;

public class Update{{ENTITY_PASCAL}}Request
{
{{#each}}
    public {{PROP_CS_TYPE}} {{PROP_PASCAL}} { get; set; }
{{/each}}
}
"#;

pub const RESPONSE: &str = r#"using System;

namespace {{CORE_PROJECT}}.{{ENTITY_PLURAL_PASCAL}}.Dto.Response;

public class {{ENTITY_PASCAL}}Response
{
{{#each}}
    public {{PROP_CS_TYPE}} {{PROP_PASCAL}} { get; set; }
{{/each}}
}
"#;

// ── C# service interface ─────────────────────────────────────────────────────

pub const SERVICE_INTERFACE: &str = r#"using {{CORE_PROJECT}}.{{ENTITY_PLURAL_PASCAL}}.Dto.Request;
using {{CORE_PROJECT}}.{{ENTITY_PLURAL_PASCAL}}.Dto.Response;

namespace {{CORE_PROJECT}}.{{ENTITY_PLURAL_PASCAL}}.Interfaces;

public interface I{{ENTITY_PASCAL}}Service
{
    Task<IEnumerable<{{ENTITY_PASCAL}}Response>> GetAllAsync();
    Task<{{ENTITY_PASCAL}}Response?> GetByIdAsync(int id);
    Task<{{ENTITY_PASCAL}}Response> CreateAsync(Create{{ENTITY_PASCAL}}Request request);
    Task<{{ENTITY_PASCAL}}Response?> UpdateAsync(int id, Update{{ENTITY_PASCAL}}Request request);
    Task<bool> DeleteAsync(int id);
}
"#;

// ── C# controller ────────────────────────────────────────────────────────────

/// The regenerable CRUD actions - everything the merge replaces on rerun.
pub const CONTROLLER_ACTIONS: &str = r#"    [HttpGet]
    public async Task<IActionResult> GetAll() =>
        Ok(await _service.GetAllAsync());

    [HttpGet("{id:int}")]
    public async Task<IActionResult> GetById(int id) =>
        await _service.GetByIdAsync(id) is { } response ? Ok(response) : NotFound();

    [HttpPost]
    public async Task<IActionResult> Create(Create{{ENTITY_PASCAL}}Request request)
    {
        var response = await _service.CreateAsync(request);
        return CreatedAtAction(nameof(GetById), new { id = response.Id }, response);
    }

    [HttpPut("{id:int}")]
    public async Task<IActionResult> Update(int id, Update{{ENTITY_PASCAL}}Request request) =>
        await _service.UpdateAsync(id, request) is { } response ? Ok(response) : NotFound();

    [HttpDelete("{id:int}")]
    public async Task<IActionResult> Delete(int id) =>
        await _service.DeleteAsync(id) ? NoContent() : NotFound();"#;

/// Full controller file with the actions spliced between sentinels.
pub fn controller() -> String {
    format!(
        r#"using Microsoft.AspNetCore.Mvc;
using {{{{CORE_PROJECT}}}}.{{{{ENTITY_PLURAL_PASCAL}}}}.Dto.Request;
using {{{{CORE_PROJECT}}}}.{{{{ENTITY_PLURAL_PASCAL}}}}.Interfaces;

namespace {{{{API_PROJECT}}}}.Controllers;

[ApiController]
[Route("api/[controller]")]
public class {{{{ENTITY_PLURAL_PASCAL}}}}Controller : ControllerBase
{{
    private readonly I{{{{ENTITY_PASCAL}}}}Service _service;

    public {{{{ENTITY_PLURAL_PASCAL}}}}Controller(I{{{{ENTITY_PASCAL}}}}Service service)
    {{
        _service = service;
    }}

    {REGION_OPEN}
{CONTROLLER_ACTIONS}
    {REGION_CLOSE}
}}
"#
    )
}

// ── Angular components ───────────────────────────────────────────────────────

pub const COMPONENT_INDEX: &str = r#"import { Component, OnInit } from '@angular/core';
import { CommonModule } from '@angular/common';
import { RouterLink } from '@angular/router';

@Component({
  selector: 'app-{{ENTITY_KEBAB}}-index',
  standalone: true,
  imports: [CommonModule, RouterLink],
  templateUrl: './{{ENTITY_KEBAB}}-index.component.html',
})
export class {{ENTITY_PASCAL}}IndexComponent implements OnInit {
  title = '{{ENTITY_PLURAL_HUMAN}}';
  {{ENTITY_PLURAL_CAMEL}}: any[] = [];

  columns = [
{{#each}}
    { field: '{{PROP_CAMEL}}', header: '{{PROP_LABEL}}' },
{{/each}}
  ];

  ngOnInit(): void {
    this.load();
  }

  load(): void {
    // TODO: wire up {{ENTITY_PASCAL}}Service once the API client is generated
  }
}
"#;

pub const COMPONENT_CREATE: &str = r#"import { Component } from '@angular/core';
import { CommonModule } from '@angular/common';
import { FormBuilder, FormGroup, ReactiveFormsModule, Validators } from '@angular/forms';

@Component({
  selector: 'app-{{ENTITY_KEBAB}}-create',
  standalone: true,
  imports: [CommonModule, ReactiveFormsModule],
  templateUrl: './{{ENTITY_KEBAB}}-create.component.html',
})
export class {{ENTITY_PASCAL}}CreateComponent {
  title = 'Create {{ENTITY_PASCAL}}';
  form: FormGroup;

  fields = [
{{#each}}
    { name: '{{PROP_CAMEL}}', label: '{{PROP_LABEL}}', control: '{{PROP_CONTROL}}', required: {{PROP_REQUIRED}} },
{{/each}}
  ];

  constructor(private fb: FormBuilder) {
    this.form = this.fb.group(
      Object.fromEntries(
        this.fields.map((f) => [f.name, ['', f.required ? Validators.required : []]]),
      ),
    );
  }

  submit(): void {
    if (this.form.invalid) {
      return;
    }
    // TODO: wire up {{ENTITY_PASCAL}}Service once the API client is generated
  }
}
"#;

pub const COMPONENT_EDIT: &str = r#"import { Component, OnInit } from '@angular/core';
import { CommonModule } from '@angular/common';
import { FormBuilder, FormGroup, ReactiveFormsModule, Validators } from '@angular/forms';
import { ActivatedRoute } from '@angular/router';

@Component({
  selector: 'app-{{ENTITY_KEBAB}}-edit',
  standalone: true,
  imports: [CommonModule, ReactiveFormsModule],
  templateUrl: './{{ENTITY_KEBAB}}-edit.component.html',
})
export class {{ENTITY_PASCAL}}EditComponent implements OnInit {
  title = 'Edit {{ENTITY_PASCAL}}';
  form: FormGroup;
  id: string | null = null;

  fields = [
{{#each}}
    { name: '{{PROP_CAMEL}}', label: '{{PROP_LABEL}}', control: '{{PROP_CONTROL}}', required: {{PROP_REQUIRED}} },
{{/each}}
  ];

  constructor(
    private fb: FormBuilder,
    private route: ActivatedRoute,
  ) {
    this.form = this.fb.group(
      Object.fromEntries(
        this.fields.map((f) => [f.name, ['', f.required ? Validators.required : []]]),
      ),
    );
  }

  ngOnInit(): void {
    this.id = this.route.snapshot.paramMap.get('id');
  }

  submit(): void {
    if (this.form.invalid) {
      return;
    }
    // TODO: wire up {{ENTITY_PASCAL}}Service once the API client is generated
  }
}
"#;

pub const COMPONENT_DETAIL: &str = r#"import { Component, OnInit } from '@angular/core';
import { CommonModule } from '@angular/common';
import { ActivatedRoute, RouterLink } from '@angular/router';

@Component({
  selector: 'app-{{ENTITY_KEBAB}}-detail',
  standalone: true,
  imports: [CommonModule, RouterLink],
  templateUrl: './{{ENTITY_KEBAB}}-detail.component.html',
})
export class {{ENTITY_PASCAL}}DetailComponent implements OnInit {
  title = '{{ENTITY_PASCAL}} Detail';
  {{ENTITY_CAMEL}}: any = null;

  rows = [
{{#each}}
    { field: '{{PROP_CAMEL}}', label: '{{PROP_LABEL}}' },
{{/each}}
  ];

  constructor(private route: ActivatedRoute) {}

  ngOnInit(): void {
    const id = this.route.snapshot.paramMap.get('id');
    // TODO: wire up {{ENTITY_PASCAL}}Service once the API client is generated
    void id;
  }
}
"#;

// ── Angular routes ───────────────────────────────────────────────────────────

/// The per-entity route entries - everything the merge replaces on rerun.
pub const ROUTE_ENTRIES: &str = r#"  {
    path: '{{ENTITY_PLURAL_KEBAB}}',
    loadComponent: () =>
      import('./{{ENTITY_PLURAL_KEBAB}}/components/pages/{{ENTITY_KEBAB}}-index.component').then(
        (m) => m.{{ENTITY_PASCAL}}IndexComponent,
      ),
  },
  {
    path: '{{ENTITY_PLURAL_KEBAB}}/create',
    loadComponent: () =>
      import('./{{ENTITY_PLURAL_KEBAB}}/components/pages/{{ENTITY_KEBAB}}-create.component').then(
        (m) => m.{{ENTITY_PASCAL}}CreateComponent,
      ),
  },
  {
    path: '{{ENTITY_PLURAL_KEBAB}}/:id',
    loadComponent: () =>
      import('./{{ENTITY_PLURAL_KEBAB}}/components/pages/{{ENTITY_KEBAB}}-detail.component').then(
        (m) => m.{{ENTITY_PASCAL}}DetailComponent,
      ),
  },
  {
    path: '{{ENTITY_PLURAL_KEBAB}}/:id/edit',
    loadComponent: () =>
      import('./{{ENTITY_PLURAL_KEBAB}}/components/pages/{{ENTITY_KEBAB}}-edit.component').then(
        (m) => m.{{ENTITY_PASCAL}}EditComponent,
      ),
  },"#;

/// Full `app.routes.ts` for a solution that does not have one yet.
pub fn routes_file() -> String {
    format!(
        r#"import {{ Routes }} from '@angular/router';

export const routes: Routes = [
  {REGION_OPEN}
{ROUTE_ENTRIES}
  {REGION_CLOSE}
];
"#
    )
}
